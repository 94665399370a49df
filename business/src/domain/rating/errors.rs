#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("rating.malformed_identifier")]
    MalformedIdentifier,
    #[error("rating.invalid_rating")]
    InvalidRating(i32),
    #[error("rating.product_not_found")]
    ProductNotFound,
    #[error("rating.transport")]
    Transport,
    #[error("rating.submission_timeout")]
    SubmissionTimeout,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

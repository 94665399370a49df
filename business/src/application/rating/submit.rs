use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::{AverageRating, Rating};
use crate::domain::rating::errors::RatingError;
use crate::domain::rating::use_cases::submit::{SubmitRatingParams, SubmitRatingUseCase};

/// Records a rating as a first-time rating from a distinct user. There is no
/// per-user tracking, so submitting twice counts twice.
pub struct SubmitRatingUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubmitRatingUseCase for SubmitRatingUseCaseImpl {
    async fn execute(&self, params: SubmitRatingParams) -> Result<AverageRating, RatingError> {
        self.logger.info(&format!(
            "Submitting rating {} for product: {}",
            params.rating, params.product_id
        ));

        let rating = Rating::new(params.rating).inspect_err(|_| {
            self.logger
                .warn(&format!("Rejected out of range rating: {}", params.rating))
        })?;

        let average = self
            .repository
            .append_rating(&params.product_id, rating)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RatingError::ProductNotFound,
                other => RatingError::Repository(other),
            })?;

        self.logger.info(&format!(
            "New average rating for product {}: {}",
            params.product_id, average
        ));
        Ok(average)
    }
}

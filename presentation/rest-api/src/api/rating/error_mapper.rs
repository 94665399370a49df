use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::rating::errors::RatingError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RatingError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            RatingError::MalformedIdentifier => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "rating.malformed_identifier",
            ),
            RatingError::InvalidRating(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "rating.invalid_rating",
            ),
            RatingError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "rating.product_not_found",
            ),
            RatingError::Transport => (
                StatusCode::BAD_GATEWAY,
                "TransportError",
                "rating.transport",
            ),
            RatingError::SubmissionTimeout => (
                StatusCode::GATEWAY_TIMEOUT,
                "TimeoutError",
                "rating.submission_timeout",
            ),
            RatingError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_each_rating_error_to_its_status() {
        let cases = [
            (RatingError::MalformedIdentifier, 400),
            (RatingError::InvalidRating(9), 400),
            (RatingError::ProductNotFound, 404),
            (RatingError::Transport, 502),
            (RatingError::SubmissionTimeout, 504),
        ];

        for (error, expected) in cases {
            let (status, _) = error.into_error_response();
            assert_eq!(status.as_u16(), expected);
        }
    }

    #[test]
    fn should_use_code_style_messages() {
        let (_, json) = RatingError::InvalidRating(0).into_error_response();

        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "rating.invalid_rating");
    }
}

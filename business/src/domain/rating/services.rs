use async_trait::async_trait;

use super::errors::RatingError;
use crate::domain::product::value_objects::{AverageRating, ProductId, Rating};

/// Delivers a rating to whichever backend records it.
///
/// Submissions are not idempotent: an implementation must never resend a
/// rating that may already have been delivered.
#[async_trait]
pub trait RatingTransport: Send + Sync {
    async fn post_rating(
        &self,
        product_id: &ProductId,
        rating: Rating,
    ) -> Result<AverageRating, RatingError>;
}

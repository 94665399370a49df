use async_trait::async_trait;

use crate::domain::product::value_objects::{AverageRating, ProductId};
use crate::domain::rating::errors::RatingError;

pub struct SubmitRatingParams {
    pub product_id: ProductId,
    /// Raw value as received; validated by the use case.
    pub rating: i32,
}

#[async_trait]
pub trait SubmitRatingUseCase: Send + Sync {
    async fn execute(&self, params: SubmitRatingParams) -> Result<AverageRating, RatingError>;
}

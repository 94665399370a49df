use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::{AverageRating, ProductId, Rating};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    /// Appends atomically with respect to other appends on the same product.
    /// Fails with `NotFound` without touching anything when the id is unknown.
    async fn append_rating(
        &self,
        id: &ProductId,
        rating: Rating,
    ) -> Result<AverageRating, RepositoryError>;
}

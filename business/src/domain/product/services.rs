use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Source of the product catalog, read once when the store starts.
#[async_trait]
pub trait ProductCatalogSource: Send + Sync {
    async fn load_products(&self) -> Result<Vec<Product>, RepositoryError>;
}

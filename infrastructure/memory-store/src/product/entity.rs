use serde::{Deserialize, Serialize};

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::product::value_objects::{ProductId, Rating};

/// Catalog record as served by the product data source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntity {
    #[serde(rename = "productID")]
    pub product_id: String,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(rename = "productRatings", default)]
    pub product_ratings: Vec<i32>,
}

impl ProductEntity {
    pub fn new(product_id: &str, product_name: &str, product_ratings: &[i32]) -> Self {
        Self {
            product_id: product_id.to_string(),
            product_name: product_name.to_string(),
            product_ratings: product_ratings.to_vec(),
        }
    }

    /// Unlike a database row, a catalog record is untrusted input: every
    /// field goes through domain validation.
    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let id = ProductId::new(self.product_id.as_str()).map_err(|_| {
            tracing::warn!(product_id = %self.product_id, "catalog entry has an invalid product id");
            RepositoryError::Persistence
        })?;

        let ratings = self
            .product_ratings
            .iter()
            .map(|value| Rating::new(*value))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| {
                tracing::warn!(product_id = %id, "catalog entry has an out of range rating");
                RepositoryError::Persistence
            })?;

        Product::new(NewProductProps {
            id,
            name: self.product_name,
            ratings,
        })
        .map_err(|_| {
            tracing::warn!(product_id = %self.product_id, "catalog entry has an empty name");
            RepositoryError::Persistence
        })
    }
}

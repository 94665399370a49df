use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::services::ProductCatalogSource;

use crate::product::entity::ProductEntity;

/// Built-in demo catalog.
pub struct SampleCatalog;

impl SampleCatalog {
    pub fn entries() -> Vec<ProductEntity> {
        vec![
            ProductEntity::new("xjfis987", "ItemA", &[1, 1]),
            ProductEntity::new("kskdu765", "ItemB", &[5, 5]),
            ProductEntity::new("0dkfjh876", "ItemC", &[3, 2]),
            ProductEntity::new("lsjfu524", "ItemD", &[1, 2]),
        ]
    }
}

#[async_trait]
impl ProductCatalogSource for SampleCatalog {
    async fn load_products(&self) -> Result<Vec<Product>, RepositoryError> {
        Self::entries()
            .into_iter()
            .map(ProductEntity::into_domain)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_load_demo_products_with_their_averages() {
        let products = SampleCatalog.load_products().await.unwrap();

        let summary: Vec<(&str, &str, u8)> = products
            .iter()
            .map(|p| {
                (
                    p.id.as_str(),
                    p.name.as_str(),
                    p.average().map(|a| a.value()).unwrap_or_default(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("xjfis987", "ItemA", 1),
                ("kskdu765", "ItemB", 5),
                ("0dkfjh876", "ItemC", 2),
                ("lsjfu524", "ItemD", 1),
            ]
        );
    }
}

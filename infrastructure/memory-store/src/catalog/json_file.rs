use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::services::ProductCatalogSource;

use crate::product::entity::ProductEntity;

/// Catalog read from a JSON array of product records.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(content: &str) -> Result<Vec<Product>, RepositoryError> {
        let entities: Vec<ProductEntity> = serde_json::from_str(content).map_err(|e| {
            tracing::error!(error = %e, "catalog file is not a valid product list");
            RepositoryError::Persistence
        })?;

        entities.into_iter().map(ProductEntity::into_domain).collect()
    }
}

#[async_trait]
impl ProductCatalogSource for JsonFileCatalog {
    async fn load_products(&self) -> Result<Vec<Product>, RepositoryError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "cannot read catalog file");
            RepositoryError::Persistence
        })?;

        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_product_list() {
        let products = JsonFileCatalog::parse(
            r#"[
                {"productID":"p1","productName":"Kettle","productRatings":[4,5]},
                {"productID":"p2","productName":"Toaster"}
            ]"#,
        )
        .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].average().map(|a| a.value()), Some(4));
        assert!(products[1].average().is_none());
    }

    #[test]
    fn should_reject_invalid_json() {
        let result = JsonFileCatalog::parse("{not json");

        assert!(matches!(result, Err(RepositoryError::Persistence)));
    }

    #[test]
    fn should_reject_invalid_entries() {
        let result = JsonFileCatalog::parse(
            r#"[{"productID":"p1","productName":"","productRatings":[]}]"#,
        );

        assert!(matches!(result, Err(RepositoryError::Persistence)));
    }

    #[tokio::test]
    async fn should_read_catalog_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "star-rating-catalog-{}.json",
            std::process::id()
        ));
        tokio::fs::write(
            &path,
            r#"[{"productID":"disk1","productName":"Lamp","productRatings":[2]}]"#,
        )
        .await
        .unwrap();

        let products = JsonFileCatalog::new(&path).load_products().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.as_str(), "disk1");
    }

    #[tokio::test]
    async fn should_fail_when_file_missing() {
        let result = JsonFileCatalog::new("/nonexistent/catalog.json")
            .load_products()
            .await;

        assert!(matches!(result, Err(RepositoryError::Persistence)));
    }
}

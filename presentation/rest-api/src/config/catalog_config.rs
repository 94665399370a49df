use std::env;
use std::sync::Arc;

use memory_store::catalog::json_file::JsonFileCatalog;
use memory_store::catalog::sample::SampleCatalog;
use memory_store::product::repository::InMemoryProductRepository;

/// Where the product catalog comes from
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub path: Option<String>,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_PATH: JSON file with the product list (default: built-in sample catalog)
    pub fn from_env() -> Self {
        let path = env::var("CATALOG_PATH").ok().filter(|p| !p.trim().is_empty());
        Self { path }
    }
}

/// Load the catalog once and build the store every use case shares
///
/// # Errors
/// Returns error if the catalog file cannot be read or holds invalid products
pub async fn init_repository(
    config: &CatalogConfig,
) -> anyhow::Result<Arc<InMemoryProductRepository>> {
    let repository = match &config.path {
        Some(path) => {
            tracing::info!(path = %path, "loading product catalog from file");
            InMemoryProductRepository::load(&JsonFileCatalog::new(path)).await?
        }
        None => {
            tracing::info!("loading built-in sample catalog");
            InMemoryProductRepository::load(&SampleCatalog).await?
        }
    };
    Ok(Arc::new(repository))
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::repository::ProductRepository;

    #[tokio::test]
    async fn should_use_sample_catalog_without_path() {
        let repository = init_repository(&CatalogConfig::default()).await.unwrap();

        assert_eq!(repository.get_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn should_fail_when_catalog_file_missing() {
        let config = CatalogConfig {
            path: Some("/nonexistent/catalog.json".to_string()),
        };

        assert!(init_repository(&config).await.is_err());
    }
}

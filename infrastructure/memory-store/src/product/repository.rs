use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::services::ProductCatalogSource;
use business::domain::product::value_objects::{AverageRating, ProductId, Rating};

/// Process-lifetime product store.
///
/// The product set is fixed once loaded, so the index needs no lock. Each
/// product sits behind its own mutex: appends to one product serialize while
/// unrelated products never wait on each other.
pub struct InMemoryProductRepository {
    products: Vec<Arc<Mutex<Product>>>,
    index: HashMap<ProductId, usize>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Result<Self, RepositoryError> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), position).is_some() {
                tracing::error!(product_id = %product.id, "duplicated product in catalog");
                return Err(RepositoryError::Duplicated);
            }
        }

        Ok(Self {
            products: products
                .into_iter()
                .map(|p| Arc::new(Mutex::new(p)))
                .collect(),
            index,
        })
    }

    pub async fn load(source: &dyn ProductCatalogSource) -> Result<Self, RepositoryError> {
        let products = source.load_products().await?;
        tracing::info!(count = products.len(), "product catalog loaded");
        Self::new(products)
    }

    fn slot(&self, id: &ProductId) -> Result<&Arc<Mutex<Product>>, RepositoryError> {
        self.index
            .get(id)
            .and_then(|position| self.products.get(*position))
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let mut products = Vec::with_capacity(self.products.len());
        for slot in &self.products {
            products.push(slot.lock().await.clone());
        }
        Ok(products)
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let slot = self.slot(id)?;
        let product = slot.lock().await.clone();
        Ok(product)
    }

    async fn append_rating(
        &self,
        id: &ProductId,
        rating: Rating,
    ) -> Result<AverageRating, RepositoryError> {
        let slot = self.slot(id)?;
        let mut product = slot.lock().await;
        let average = product.add_rating(rating);
        tracing::debug!(
            product_id = %id,
            ratings = product.ratings_count(),
            average = average.value(),
            "rating appended"
        );
        Ok(average)
    }
}

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use business::domain::product::value_objects::{AverageRating, ProductId, Rating};
use business::domain::rating::errors::RatingError;
use business::domain::rating::services::RatingTransport;
use business::domain::rating::use_cases::submit::{SubmitRatingParams, SubmitRatingUseCase};

/// Hands ratings straight to the submission use case, optionally after a
/// simulated network delay.
pub struct InProcessRatingTransport {
    use_case: Arc<dyn SubmitRatingUseCase>,
    latency: Duration,
}

impl InProcessRatingTransport {
    pub fn new(use_case: Arc<dyn SubmitRatingUseCase>) -> Self {
        Self {
            use_case,
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl RatingTransport for InProcessRatingTransport {
    async fn post_rating(
        &self,
        product_id: &ProductId,
        rating: Rating,
    ) -> Result<AverageRating, RatingError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        self.use_case
            .execute(SubmitRatingParams {
                product_id: product_id.clone(),
                rating: i32::from(rating.value()),
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::rating::submit::SubmitRatingUseCaseImpl;
    use business::domain::product::repository::ProductRepository;
    use logger::TracingLogger;
    use memory_store::catalog::sample::SampleCatalog;
    use memory_store::product::repository::InMemoryProductRepository;

    async fn wire() -> (Arc<InMemoryProductRepository>, InProcessRatingTransport) {
        let repository = Arc::new(InMemoryProductRepository::load(&SampleCatalog).await.unwrap());
        let use_case = Arc::new(SubmitRatingUseCaseImpl {
            repository: repository.clone(),
            logger: Arc::new(TracingLogger),
        });
        (repository, InProcessRatingTransport::new(use_case))
    }

    fn id(value: &str) -> ProductId {
        ProductId::new(value).unwrap()
    }

    #[tokio::test]
    async fn should_record_rating_and_return_new_average() {
        let (repository, transport) = wire().await;

        let average = transport
            .post_rating(&id("xjfis987"), Rating::new(5).unwrap())
            .await
            .unwrap();

        assert_eq!(average.value(), 2);
        let product = repository.get_by_id(&id("xjfis987")).await.unwrap();
        let values: Vec<u8> = product.ratings().iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![1, 1, 5]);
    }

    #[tokio::test]
    async fn should_count_the_same_rating_twice() {
        let (repository, transport) = wire().await;
        let before = repository.get_by_id(&id("xjfis987")).await.unwrap();

        let first = transport
            .post_rating(&id("xjfis987"), Rating::new(5).unwrap())
            .await
            .unwrap();
        let second = transport
            .post_rating(&id("xjfis987"), Rating::new(5).unwrap())
            .await
            .unwrap();

        let after = repository.get_by_id(&id("xjfis987")).await.unwrap();
        assert_eq!(after.ratings_count(), before.ratings_count() + 2);
        assert_eq!(first.value(), 2);
        assert_eq!(second.value(), 3);
    }

    #[tokio::test]
    async fn should_surface_unknown_product() {
        let (_, transport) = wire().await;

        let result = transport
            .post_rating(&id("missing"), Rating::new(3).unwrap())
            .await;

        assert!(matches!(result, Err(RatingError::ProductNotFound)));
    }

    #[tokio::test]
    async fn should_wait_for_simulated_latency() {
        let (_, transport) = wire().await;
        let transport = transport.with_latency(Duration::from_millis(30));

        let started = std::time::Instant::now();
        transport
            .post_rating(&id("lsjfu524"), Rating::new(4).unwrap())
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}

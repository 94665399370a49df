use std::sync::Arc;

use logger::TracingLogger;
use memory_store::product::repository::InMemoryProductRepository;
use transport::client::RatingApiClient;
use transport::http::HttpRatingTransport;
use transport::in_process::InProcessRatingTransport;

use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::rating::rate_from_widget::RateFromWidgetUseCaseImpl;
use business::application::rating::submit::SubmitRatingUseCaseImpl;
use business::application::widget::render::RenderWidgetUseCaseImpl;
use business::domain::rating::services::RatingTransport;

use crate::api::widget::renderer::HtmlStarWidgetRenderer;
use crate::config::rating_config::RatingConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub rating_api: crate::api::rating::routes::RatingApi,
    pub widget_api: crate::api::widget::routes::WidgetApi,
}

impl DependencyContainer {
    /// The repository is the only owner of product state; every use case
    /// shares it.
    pub fn new(config: &RatingConfig, repository: Arc<InMemoryProductRepository>) -> Self {
        let logger = Arc::new(TracingLogger);
        let renderer = Arc::new(HtmlStarWidgetRenderer::default());

        // Product use cases
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });

        // Rating use cases
        let submit_use_case = Arc::new(SubmitRatingUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let rating_transport: Arc<dyn RatingTransport> = match &config.backend_url {
            Some(url) => {
                tracing::info!(backend = %url, "submitting widget ratings over HTTP");
                Arc::new(HttpRatingTransport::new(
                    RatingApiClient::new(url.clone(), config.submission_timeout),
                    config.max_retries,
                ))
            }
            None => Arc::new(
                InProcessRatingTransport::new(submit_use_case.clone())
                    .with_latency(config.simulated_latency),
            ),
        };
        let rate_from_widget_use_case = Arc::new(RateFromWidgetUseCaseImpl {
            transport: rating_transport,
            renderer: renderer.clone(),
            logger: logger.clone(),
            timeout: config.submission_timeout,
        });

        // Widget use cases
        let render_widget_use_case = Arc::new(RenderWidgetUseCaseImpl {
            repository,
            renderer,
            logger,
        });

        let health_api = crate::api::health::routes::Api::new(get_all_use_case.clone());
        let product_api =
            crate::api::product::routes::ProductApi::new(get_all_use_case, get_by_id_use_case);
        let rating_api = crate::api::rating::routes::RatingApi::new(
            submit_use_case,
            rate_from_widget_use_case,
        );
        let widget_api = crate::api::widget::routes::WidgetApi::new(render_widget_use_case);

        Self {
            health_api,
            product_api,
            rating_api,
            widget_api,
        }
    }
}

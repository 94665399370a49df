use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Mount every API plus the Swagger UI and the OpenAPI document
    pub fn routes(container: DependencyContainer, server_url: String) -> Route {
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.product_api,
                container.rating_api,
                container.widget_api,
            ),
            "Star Rating API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(server_url);
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::routes(container, format!("http://{}", addr))
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

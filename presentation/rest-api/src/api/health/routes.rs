use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" when the product store answers, "degraded" otherwise
    pub status: String,
    /// Number of products in the catalog
    pub products: u64,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
}

impl Api {
    pub fn new(get_all_use_case: Arc<dyn GetAllProductsUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service and the catalog size.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let (status, products) = match self.get_all_use_case.execute().await {
            Ok(products) => ("healthy", products.len() as u64),
            Err(_) => ("degraded", 0),
        };

        Json(HealthCheckResponse {
            status: status.to_string(),
            products,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

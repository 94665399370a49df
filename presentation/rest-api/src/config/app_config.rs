use super::{
    catalog_config::CatalogConfig, cors_config, rating_config::RatingConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub catalog: CatalogConfig,
    pub rating: RatingConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            catalog: CatalogConfig::from_env(),
            rating: RatingConfig::from_env(),
        }
    }
}

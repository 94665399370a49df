use std::time::Duration;

use reqwest::{Client, Url};

use business::domain::product::value_objects::ProductId;
use business::domain::rating::errors::RatingError;

/// Shared HTTP client configuration for the rating backend.
pub struct RatingApiClient {
    pub client: Client,
    pub base_url: String,
}

impl RatingApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Returns `{base}/products/{id}/ratings`, with the id percent-encoded as
    /// a single path segment.
    pub fn ratings_url(&self, product_id: &ProductId) -> Result<Url, RatingError> {
        let mut url = Url::parse(&self.base_url).map_err(|_| RatingError::Transport)?;
        url.path_segments_mut()
            .map_err(|_| RatingError::Transport)?
            .pop_if_empty()
            .extend(["products", product_id.as_str(), "ratings"]);
        Ok(url)
    }
}

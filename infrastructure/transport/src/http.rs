use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use business::domain::product::value_objects::{AverageRating, ProductId, Rating};
use business::domain::rating::errors::RatingError;
use business::domain::rating::services::RatingTransport;

use crate::client::RatingApiClient;

#[derive(Debug, Serialize)]
struct RatingRequest {
    rating: i32,
}

#[derive(Debug, Deserialize)]
struct RatingResponse {
    average: i32,
}

/// Posts ratings to the REST backend.
///
/// Only connection failures are retried: when the connection was never
/// established the rating cannot have been recorded. Anything that may have
/// reached the backend is reported as is, since a resend would count twice.
pub struct HttpRatingTransport {
    client: RatingApiClient,
    max_retries: u32,
    base_backoff: Duration,
}

impl HttpRatingTransport {
    pub fn new(client: RatingApiClient, max_retries: u32) -> Self {
        Self {
            client,
            max_retries,
            base_backoff: Duration::from_millis(100),
        }
    }

    pub fn with_backoff(mut self, base_backoff: Duration) -> Self {
        self.base_backoff = base_backoff;
        self
    }

    fn backoff(&self, attempt: u32) -> Duration {
        self.base_backoff
            .saturating_mul(2u32.saturating_pow(attempt))
    }

    fn map_status(status: StatusCode, rating: Rating) -> RatingError {
        match status {
            StatusCode::NOT_FOUND => RatingError::ProductNotFound,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                RatingError::InvalidRating(i32::from(rating.value()))
            }
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                RatingError::SubmissionTimeout
            }
            _ => RatingError::Transport,
        }
    }

    fn map_send_error(error: &reqwest::Error) -> RatingError {
        if error.is_timeout() {
            RatingError::SubmissionTimeout
        } else {
            RatingError::Transport
        }
    }
}

#[async_trait]
impl RatingTransport for HttpRatingTransport {
    async fn post_rating(
        &self,
        product_id: &ProductId,
        rating: Rating,
    ) -> Result<AverageRating, RatingError> {
        let url = self.client.ratings_url(product_id)?;
        let body = RatingRequest {
            rating: i32::from(rating.value()),
        };

        let mut attempt = 0;
        let response = loop {
            match self.client.client.post(url.clone()).json(&body).send().await {
                Ok(response) => break response,
                Err(e) if e.is_connect() && attempt < self.max_retries => {
                    let delay = self.backoff(attempt);
                    tracing::warn!(
                        product_id = %product_id,
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        "rating backend unreachable, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(product_id = %product_id, error = %e, "rating submission failed");
                    return Err(Self::map_send_error(&e));
                }
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                product_id = %product_id,
                status = response.status().as_u16(),
                "rating backend rejected submission"
            );
            return Err(Self::map_status(response.status(), rating));
        }

        let data: RatingResponse = response
            .json()
            .await
            .map_err(|_| RatingError::Transport)?;

        AverageRating::new(data.average).ok_or(RatingError::Transport)
    }
}

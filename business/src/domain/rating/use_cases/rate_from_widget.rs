use async_trait::async_trait;

use crate::domain::rating::errors::RatingError;
use crate::domain::widget::model::RenderedWidget;

pub struct RateFromWidgetParams {
    /// Identifier of the clicked star, e.g. `xjfis987_4Stars`.
    pub identifier: String,
}

#[async_trait]
pub trait RateFromWidgetUseCase: Send + Sync {
    async fn execute(&self, params: RateFromWidgetParams) -> Result<RenderedWidget, RatingError>;
}

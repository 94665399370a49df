use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::value_objects::ProductId;
use crate::domain::widget::model::RenderedWidget;

pub struct RenderWidgetParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait RenderWidgetUseCase: Send + Sync {
    async fn execute(&self, params: RenderWidgetParams) -> Result<RenderedWidget, ProductError>;
}

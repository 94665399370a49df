use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::widget::model::{RenderedWidget, StarWidget};
use crate::domain::widget::renderer::WidgetRenderer;
use crate::domain::widget::use_cases::render::{RenderWidgetParams, RenderWidgetUseCase};

pub struct RenderWidgetUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub renderer: Arc<dyn WidgetRenderer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RenderWidgetUseCase for RenderWidgetUseCaseImpl {
    async fn execute(&self, params: RenderWidgetParams) -> Result<RenderedWidget, ProductError> {
        self.logger
            .info(&format!("Rendering widget for product: {}", params.product_id));

        let product = self
            .repository
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        // unrated products draw as zero stars
        let average = product.average().unwrap_or_default();
        let widget = StarWidget::new(product.id, average);
        let markup = self.renderer.render(&widget);

        Ok(RenderedWidget { widget, markup })
    }
}

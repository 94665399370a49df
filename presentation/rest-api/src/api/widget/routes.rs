use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::value_objects::ProductId;
use business::domain::widget::use_cases::render::{RenderWidgetParams, RenderWidgetUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::widget::dto::WidgetResponse;

pub struct WidgetApi {
    render_use_case: Arc<dyn RenderWidgetUseCase>,
}

impl WidgetApi {
    pub fn new(render_use_case: Arc<dyn RenderWidgetUseCase>) -> Self {
        Self { render_use_case }
    }
}

/// Star widget API
#[OpenApi]
impl WidgetApi {
    /// Render a product's star widget
    ///
    /// Draws the widget from the product's current average; unrated products
    /// get five empty stars.
    #[oai(path = "/products/:id/widget", method = "get", tag = "ApiTags::Widgets")]
    async fn render_widget(&self, id: Path<String>) -> RenderWidgetResponse {
        let Ok(product_id) = ProductId::new(id.0) else {
            return RenderWidgetResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_id",
            ));
        };

        match self
            .render_use_case
            .execute(RenderWidgetParams { product_id })
            .await
        {
            Ok(rendered) => RenderWidgetResponse::Ok(Json(rendered.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RenderWidgetResponse::NotFound(json),
                    _ => RenderWidgetResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RenderWidgetResponse {
    #[oai(status = 200)]
    Ok(Json<WidgetResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

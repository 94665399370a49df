use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::value_objects::ProductId;
use business::domain::rating::use_cases::rate_from_widget::{
    RateFromWidgetParams, RateFromWidgetUseCase,
};
use business::domain::rating::use_cases::submit::{SubmitRatingParams, SubmitRatingUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::rating::dto::{RatingResponse, SubmitRatingRequest, WidgetRatingRequest};
use crate::api::tags::ApiTags;
use crate::api::widget::dto::WidgetResponse;

pub struct RatingApi {
    submit_use_case: Arc<dyn SubmitRatingUseCase>,
    rate_from_widget_use_case: Arc<dyn RateFromWidgetUseCase>,
}

impl RatingApi {
    pub fn new(
        submit_use_case: Arc<dyn SubmitRatingUseCase>,
        rate_from_widget_use_case: Arc<dyn RateFromWidgetUseCase>,
    ) -> Self {
        Self {
            submit_use_case,
            rate_from_widget_use_case,
        }
    }
}

/// Rating API
///
/// Records user ratings. Every call counts as a new rating: sending the same
/// rating twice counts it twice.
#[OpenApi]
impl RatingApi {
    /// Rate a product
    ///
    /// Appends a rating between 1 and 5 and returns the product's new average.
    #[oai(path = "/products/:id/ratings", method = "post", tag = "ApiTags::Ratings")]
    async fn submit_rating(
        &self,
        id: Path<String>,
        body: Json<SubmitRatingRequest>,
    ) -> SubmitRatingResponse {
        let Ok(product_id) = ProductId::new(id.0) else {
            return SubmitRatingResponse::BadRequest(ErrorResponse::validation(
                "product.invalid_id",
            ));
        };

        let params = SubmitRatingParams {
            product_id: product_id.clone(),
            rating: body.0.rating,
        };

        match self.submit_use_case.execute(params).await {
            Ok(average) => SubmitRatingResponse::Ok(Json(RatingResponse {
                product_id: product_id.to_string(),
                average: i32::from(average.value()),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitRatingResponse::BadRequest(json),
                    404 => SubmitRatingResponse::NotFound(json),
                    _ => SubmitRatingResponse::InternalError(json),
                }
            }
        }
    }

    /// Rate from a widget click
    ///
    /// Takes the identifier of the clicked star, records the rating and
    /// returns the widget redrawn with the new average.
    #[oai(path = "/widgets/ratings", method = "post", tag = "ApiTags::Widgets")]
    async fn rate_from_widget(&self, body: Json<WidgetRatingRequest>) -> RateFromWidgetResponse {
        let params = RateFromWidgetParams {
            identifier: body.0.identifier,
        };

        match self.rate_from_widget_use_case.execute(params).await {
            Ok(rendered) => RateFromWidgetResponse::Ok(Json(rendered.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RateFromWidgetResponse::BadRequest(json),
                    404 => RateFromWidgetResponse::NotFound(json),
                    502 => RateFromWidgetResponse::BadGateway(json),
                    504 => RateFromWidgetResponse::GatewayTimeout(json),
                    _ => RateFromWidgetResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitRatingResponse {
    #[oai(status = 200)]
    Ok(Json<RatingResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RateFromWidgetResponse {
    #[oai(status = 200)]
    Ok(Json<WidgetResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

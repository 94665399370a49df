use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::rating::errors::RatingError;
use crate::domain::rating::identifier;
use crate::domain::rating::services::RatingTransport;
use crate::domain::rating::use_cases::rate_from_widget::{
    RateFromWidgetParams, RateFromWidgetUseCase,
};
use crate::domain::widget::model::{RenderedWidget, StarWidget};
use crate::domain::widget::renderer::WidgetRenderer;

/// Handles a click on a widget star: decode, submit, redraw.
pub struct RateFromWidgetUseCaseImpl {
    pub transport: Arc<dyn RatingTransport>,
    pub renderer: Arc<dyn WidgetRenderer>,
    pub logger: Arc<dyn Logger>,
    /// Upper bound for the transport round trip.
    pub timeout: Duration,
}

#[async_trait]
impl RateFromWidgetUseCase for RateFromWidgetUseCaseImpl {
    async fn execute(&self, params: RateFromWidgetParams) -> Result<RenderedWidget, RatingError> {
        self.logger
            .debug(&format!("Widget star clicked: {}", params.identifier));

        let star_id = identifier::decode(&params.identifier).inspect_err(|_| {
            self.logger.warn(&format!(
                "Malformed widget identifier: {}",
                params.identifier
            ))
        })?;
        let rating = star_id.rating()?;
        let (product_id, _) = star_id.into_parts();

        let average = tokio::time::timeout(
            self.timeout,
            self.transport.post_rating(&product_id, rating),
        )
        .await
        .map_err(|_| {
            self.logger.error(&format!(
                "Rating submission for product {} timed out after {:?}",
                product_id, self.timeout
            ));
            RatingError::SubmissionTimeout
        })??;

        let widget = StarWidget::new(product_id, average);
        let markup = self.renderer.render(&widget);

        self.logger.info(&format!(
            "Widget {} redrawn with {} filled stars",
            widget.container_id(),
            widget.filled_count()
        ));
        Ok(RenderedWidget { widget, markup })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::{AverageRating, ProductId, Rating};
    use mockall::mock;

    mock! {
        pub Transport {}

        #[async_trait]
        impl RatingTransport for Transport {
            async fn post_rating(&self, product_id: &ProductId, rating: Rating) -> Result<AverageRating, RatingError>;
        }
    }

    mock! {
        pub Renderer {}

        impl WidgetRenderer for Renderer {
            fn render(&self, widget: &StarWidget) -> String;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn counting_renderer() -> Arc<dyn WidgetRenderer> {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .returning(|widget| format!("{}:{}", widget.container_id(), widget.filled_count()));
        Arc::new(renderer)
    }

    struct SlowTransport;

    #[async_trait]
    impl RatingTransport for SlowTransport {
        async fn post_rating(
            &self,
            _product_id: &ProductId,
            _rating: Rating,
        ) -> Result<AverageRating, RatingError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(AverageRating::default())
        }
    }

    #[tokio::test]
    async fn should_submit_decoded_rating_and_redraw_widget() {
        let mut transport = MockTransport::new();
        transport
            .expect_post_rating()
            .withf(|id, rating| id.as_str() == "xjfis987" && rating.value() == 5)
            .times(1)
            .returning(|_, _| Ok(AverageRating::new(2).unwrap()));

        let use_case = RateFromWidgetUseCaseImpl {
            transport: Arc::new(transport),
            renderer: counting_renderer(),
            logger: mock_logger(),
            timeout: Duration::from_secs(1),
        };

        let rendered = use_case
            .execute(RateFromWidgetParams {
                identifier: "xjfis987_5Stars".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(rendered.widget.product_id().as_str(), "xjfis987");
        assert_eq!(rendered.widget.average().value(), 2);
        assert_eq!(rendered.widget.filled_count(), 2);
        assert_eq!(rendered.markup, "xjfis987_StarRatingWidget:2");
    }

    #[tokio::test]
    async fn should_reject_malformed_identifier_without_sending() {
        let mut transport = MockTransport::new();
        transport.expect_post_rating().never();

        let use_case = RateFromWidgetUseCaseImpl {
            transport: Arc::new(transport),
            renderer: counting_renderer(),
            logger: mock_logger(),
            timeout: Duration::from_secs(1),
        };

        let result = use_case
            .execute(RateFromWidgetParams {
                identifier: "xjfis987-five-stars".to_string(),
            })
            .await;

        assert!(matches!(result, Err(RatingError::MalformedIdentifier)));
    }

    #[tokio::test]
    async fn should_reject_out_of_range_star_without_sending() {
        let mut transport = MockTransport::new();
        transport.expect_post_rating().never();

        let use_case = RateFromWidgetUseCaseImpl {
            transport: Arc::new(transport),
            renderer: counting_renderer(),
            logger: mock_logger(),
            timeout: Duration::from_secs(1),
        };

        let result = use_case
            .execute(RateFromWidgetParams {
                identifier: "xjfis987_0Stars".to_string(),
            })
            .await;

        assert!(matches!(result, Err(RatingError::InvalidRating(0))));
    }

    #[tokio::test]
    async fn should_surface_transport_errors() {
        let mut transport = MockTransport::new();
        transport
            .expect_post_rating()
            .returning(|_, _| Err(RatingError::Transport));
        let mut renderer = MockRenderer::new();
        renderer.expect_render().never();

        let use_case = RateFromWidgetUseCaseImpl {
            transport: Arc::new(transport),
            renderer: Arc::new(renderer),
            logger: mock_logger(),
            timeout: Duration::from_secs(1),
        };

        let result = use_case
            .execute(RateFromWidgetParams {
                identifier: "kskdu765_3Stars".to_string(),
            })
            .await;

        assert!(matches!(result, Err(RatingError::Transport)));
    }

    #[tokio::test]
    async fn should_time_out_slow_submissions() {
        let use_case = RateFromWidgetUseCaseImpl {
            transport: Arc::new(SlowTransport),
            renderer: counting_renderer(),
            logger: mock_logger(),
            timeout: Duration::from_millis(20),
        };

        let result = use_case
            .execute(RateFromWidgetParams {
                identifier: "kskdu765_3Stars".to_string(),
            })
            .await;

        assert!(matches!(result, Err(RatingError::SubmissionTimeout)));
    }
}

use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct SubmitRatingRequest {
    /// Rating between 1 and 5
    pub rating: i32,
}

#[derive(Debug, Clone, Object)]
pub struct RatingResponse {
    /// Rated product
    pub product_id: String,
    /// New floor average after recording the rating
    pub average: i32,
}

#[derive(Debug, Clone, Object)]
pub struct WidgetRatingRequest {
    /// Identifier of the clicked star, e.g. `xjfis987_4Stars`
    pub identifier: String,
}

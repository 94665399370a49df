use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Every rating received so far, oldest first
    pub ratings: Vec<i32>,
    /// Floor of the mean rating, absent until the first rating
    #[oai(skip_serializing_if_is_none)]
    pub average: Option<i32>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            ratings: product
                .ratings()
                .iter()
                .map(|r| i32::from(r.value()))
                .collect(),
            average: product.average().map(|a| i32::from(a.value())),
            id: product.id.to_string(),
            name: product.name,
        }
    }
}

use super::errors::ProductError;
use super::value_objects::{AverageRating, ProductId, Rating, average_rating};

/// A rateable product and every rating it has received so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    ratings: Vec<Rating>,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub name: String,
    pub ratings: Vec<Rating>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        Ok(Self {
            id: props.id,
            name: props.name,
            ratings: props.ratings,
        })
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn ratings_count(&self) -> usize {
        self.ratings.len()
    }

    /// Recomputed on every call; `None` until the first rating arrives.
    pub fn average(&self) -> Option<AverageRating> {
        average_rating(&self.ratings)
    }

    /// Records one more rating and returns the new average.
    pub fn add_rating(&mut self, rating: Rating) -> AverageRating {
        self.ratings.push(rating);
        average_rating(&self.ratings).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, ratings: &[i32]) -> NewProductProps {
        NewProductProps {
            id: ProductId::new("xjfis987").unwrap(),
            name: name.to_string(),
            ratings: ratings.iter().map(|r| Rating::new(*r).unwrap()).collect(),
        }
    }

    #[test]
    fn should_create_product_when_name_valid() {
        let product = Product::new(props("ItemA", &[1, 1])).unwrap();

        assert_eq!(product.name, "ItemA");
        assert_eq!(product.ratings_count(), 2);
        assert_eq!(product.average().map(|a| a.value()), Some(1));
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let result = Product::new(props("   ", &[]));

        assert!(matches!(result, Err(ProductError::NameEmpty)));
    }

    #[test]
    fn should_have_no_average_when_never_rated() {
        let product = Product::new(props("ItemA", &[])).unwrap();

        assert!(product.average().is_none());
    }

    #[test]
    fn should_append_rating_and_return_floor_average() {
        let mut product = Product::new(props("ItemA", &[1, 1])).unwrap();

        let average = product.add_rating(Rating::new(5).unwrap());

        assert_eq!(average.value(), 2);
        let values: Vec<u8> = product.ratings().iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![1, 1, 5]);
    }

    #[test]
    fn should_average_first_rating_on_its_own() {
        let mut product = Product::new(props("ItemA", &[])).unwrap();

        let average = product.add_rating(Rating::new(4).unwrap());

        assert_eq!(average.value(), 4);
    }
}

use crate::domain::product::value_objects::{AverageRating, MAX_RATING, ProductId, Rating};
use crate::domain::rating::identifier::StarRatingId;

/// One clickable star of a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarCell {
    pub id: StarRatingId,
    pub filled: bool,
}

/// Star display bound to a single product's average rating.
///
/// Always holds `MAX_RATING` cells in star order, the first `average` of them
/// filled. A widget is never patched: every change builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarWidget {
    product_id: ProductId,
    average: AverageRating,
    cells: Vec<StarCell>,
}

impl StarWidget {
    pub fn new(product_id: ProductId, average: AverageRating) -> Self {
        let cells = (1..=MAX_RATING)
            .filter_map(|star| Rating::new(star).ok())
            .map(|rating| StarCell {
                id: StarRatingId::new(product_id.clone(), rating),
                filled: rating.value() <= average.value(),
            })
            .collect();

        Self {
            product_id,
            average,
            cells,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn average(&self) -> AverageRating {
        self.average
    }

    pub fn cells(&self) -> &[StarCell] {
        &self.cells
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.filled).count()
    }

    /// DOM id of the element that hosts this widget.
    pub fn container_id(&self) -> String {
        format!("{}_StarRatingWidget", self.product_id)
    }
}

/// A widget together with the markup produced for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWidget {
    pub widget: StarWidget,
    pub markup: String,
}

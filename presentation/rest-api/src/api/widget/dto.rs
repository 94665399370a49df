use poem_openapi::Object;

use business::domain::widget::model::{RenderedWidget, StarCell};

#[derive(Debug, Clone, Object)]
pub struct StarCellResponse {
    /// Identifier to send back when this star is clicked
    pub id: String,
    /// 1-based star position
    pub star: i32,
    pub filled: bool,
}

impl From<&StarCell> for StarCellResponse {
    fn from(cell: &StarCell) -> Self {
        Self {
            id: cell.id.to_string(),
            star: i32::from(cell.id.star()),
            filled: cell.filled,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct WidgetResponse {
    pub product_id: String,
    /// DOM id of the element hosting the widget
    pub container_id: String,
    /// Number of filled stars
    pub average: i32,
    /// Stars in ascending order
    pub cells: Vec<StarCellResponse>,
    /// Ready-to-insert HTML
    pub markup: String,
}

impl From<RenderedWidget> for WidgetResponse {
    fn from(rendered: RenderedWidget) -> Self {
        let widget = rendered.widget;
        Self {
            product_id: widget.product_id().to_string(),
            container_id: widget.container_id(),
            average: i32::from(widget.average().value()),
            cells: widget.cells().iter().map(StarCellResponse::from).collect(),
            markup: rendered.markup,
        }
    }
}

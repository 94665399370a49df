use business::domain::widget::model::StarWidget;
use business::domain::widget::renderer::WidgetRenderer;

const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// Renders widgets as the HTML fragment the product page inserts.
///
/// Stars are emitted from the highest down to the first because the page
/// stylesheet lays them out right to left.
pub struct HtmlStarWidgetRenderer {
    on_click: String,
}

impl HtmlStarWidgetRenderer {
    pub fn new(on_click: impl Into<String>) -> Self {
        Self {
            on_click: on_click.into(),
        }
    }
}

impl Default for HtmlStarWidgetRenderer {
    fn default() -> Self {
        Self::new("userClickRating(this)")
    }
}

impl WidgetRenderer for HtmlStarWidgetRenderer {
    fn render(&self, widget: &StarWidget) -> String {
        let on_click = escape_attribute(&self.on_click);
        let stars: String = widget
            .cells()
            .iter()
            .rev()
            .map(|cell| {
                format!(
                    r#"<span id="{}" onclick="{}">{}</span>"#,
                    escape_attribute(&cell.id.to_string()),
                    on_click,
                    if cell.filled { FILLED_STAR } else { EMPTY_STAR }
                )
            })
            .collect();

        format!(
            r#"<div id="{}" class="rating">{}</div>"#,
            escape_attribute(&widget.container_id()),
            stars
        )
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

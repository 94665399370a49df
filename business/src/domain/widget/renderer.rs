use super::model::StarWidget;

/// Turns a widget into whatever the client draws. Must be a pure function of
/// the widget: rendering the same widget twice yields the same output.
pub trait WidgetRenderer: Send + Sync {
    fn render(&self, widget: &StarWidget) -> String;
}

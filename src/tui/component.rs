use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (public struct fields set by the parent
/// before rendering) and may keep internal state such as a text buffer or a
/// scroll offset. `render` takes `&mut self` so a component can update that
/// presentation state during the render pass, e.g. scrolling a field so the
/// cursor stays visible.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

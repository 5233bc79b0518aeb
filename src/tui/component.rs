use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields), may hold
/// presentation state, and render into a `Frame` within a given `Rect`.
/// `render` takes `&mut self` so a component can update internal caches
/// (scroll offsets, layout measurements) during the render pass, matching
/// Ratatui's `StatefulWidget` shape.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component state that consumes terminal events.
///
/// Implemented by the persistent halves of the stateful components
/// (`FormState`, `SchemaEditorState`, `PathPromptState`): they digest raw
/// `TuiEvent`s and occasionally emit a high-level event for the main loop
/// to act on.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

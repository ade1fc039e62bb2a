use ratatui::Frame;
use ratatui::layout::Rect;

/// Something that draws itself into a `Rect`.
///
/// Props are struct fields set by the caller each frame; persistent screen
/// state is borrowed in as `&mut XState`. `render` takes `&mut self` so it
/// can clamp scroll offsets while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
///
/// Screen states emit `core::action::Action` directly; smaller widgets emit
/// their own event type and let the owning screen translate it.
pub trait EventHandler {
    type Event;

    /// `None` when the key was consumed locally or ignored.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}

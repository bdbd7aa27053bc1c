use crate::command::ExecutedCommand;
use crate::document::Document;
use crate::input::MouseStatus;
use crate::renderer::{Renderer, Viewport};

/// A press / drag / release interaction with the document.
///
/// Tools mutate the document directly while the pointer is down so the user
/// sees the result immediately. When a gesture completes they hand back one
/// [`ExecutedCommand`] covering the whole gesture, carrying the snapshot taken
/// at press time; the caller records it in the history.
///
/// Drags and releases that arrive without a preceding press are ignored.
pub trait Tool {
    fn name(&self) -> &'static str;

    /// True between a handled press and the matching release.
    fn is_busy(&self) -> bool;

    fn on_pointer_down(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand>;

    fn on_pointer_move(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand>;

    fn on_pointer_up(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand>;

    /// Called when the tool is deselected. Completes a gesture in progress at
    /// its last known position.
    fn deactivate(&mut self, document: &mut Document) -> Option<ExecutedCommand>;

    /// Draws tool feedback on top of the canvas.
    fn draw(&self, _renderer: &mut dyn Renderer, _viewport: &Viewport) {
        // default: nothing to draw
    }
}

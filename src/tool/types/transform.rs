use egui::{Pos2, Vec2};
use log::{trace, warn};

use crate::color::Color;
use crate::command::{Command, ExecutedCommand};
use crate::document::Document;
use crate::input::{MouseButton, MouseStatus};
use crate::memento::DocumentMemento;
use crate::renderer::{Renderer, Viewport};
use crate::tool::Tool;

/// Pointer tracking for one move gesture.
///
/// Once stopped, further updates are ignored and the total stays frozen.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerMovement {
    start: Pos2,
    last: Pos2,
    finished: bool,
}

impl LayerMovement {
    pub fn new(start: Pos2) -> Self {
        Self {
            start,
            last: start,
            finished: false,
        }
    }

    /// Returns the step since the previous update.
    pub fn update(&mut self, pos: Pos2) -> Option<Vec2> {
        if self.finished {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        Some(delta)
    }

    /// Distance covered since the gesture started.
    pub fn total(&self) -> Vec2 {
        self.last - self.start
    }

    pub fn stop(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Angle of `pos` around `anchor` in degrees, computed as `atan(dy / dx)`.
///
/// There is no quadrant correction: the result is always in `-90..=90`, so
/// crossing the vertical axis through the anchor makes the angle jump by
/// 180 degrees. A zero vector gives 0.
pub fn mouse_angle(anchor: Pos2, pos: Pos2) -> f32 {
    let dx = pos.x - anchor.x;
    let dy = pos.y - anchor.y;
    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }
    (dy / dx).atan().to_degrees()
}

/// Pointer tracking for one rotate gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerRotation {
    anchor: Pos2,
    base_angle: f32,
    start_mouse_angle: f32,
    current_angle: f32,
    last: Pos2,
    finished: bool,
}

impl LayerRotation {
    pub fn new(anchor: Pos2, base_angle: f32, start: Pos2) -> Self {
        Self {
            anchor,
            base_angle,
            start_mouse_angle: mouse_angle(anchor, start),
            current_angle: base_angle,
            last: start,
            finished: false,
        }
    }

    /// Returns the layer angle for the pointer at `pos`.
    pub fn update(&mut self, pos: Pos2) -> Option<f32> {
        if self.finished {
            return None;
        }
        self.last = pos;
        self.current_angle = self.base_angle + (mouse_angle(self.anchor, pos) - self.start_mouse_angle);
        Some(self.current_angle)
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn base_angle(&self) -> f32 {
        self.base_angle
    }

    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }

    pub fn stop(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

#[derive(Debug, Clone)]
struct MoveState {
    movement: LayerMovement,
    pre_image: DocumentMemento,
}

/// Drags the active layer around. A whole gesture becomes one
/// [`Command::MoveLayer`] with the total distance.
#[derive(Debug, Clone, Default)]
pub struct MoveTool {
    current_state: Option<MoveState>,
}

impl MoveTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn movement(&self) -> Option<&LayerMovement> {
        self.current_state.as_ref().map(|s| &s.movement)
    }

    /// Freezes the gesture in progress; later drags no longer move the layer.
    pub fn stop(&mut self) {
        if let Some(state) = &mut self.current_state {
            state.movement.stop();
        }
    }

    fn track(&mut self, pos: Pos2, document: &mut Document) {
        let Some(state) = &mut self.current_state else {
            return;
        };
        if let Some(delta) = state.movement.update(pos) {
            if delta != Vec2::ZERO {
                document.canvas_mut().move_active_layer(delta);
            }
        }
    }

    fn finish(&mut self, document: &mut Document) -> Option<ExecutedCommand> {
        let state = self.current_state.take()?;
        let delta = state.movement.total();
        if !(delta.x.is_finite() && delta.y.is_finite()) {
            warn!("dropping move with a non-finite delta");
            document.restore(state.pre_image);
            return None;
        }
        if delta == Vec2::ZERO {
            return None;
        }
        Some(ExecutedCommand::already_applied(
            Command::MoveLayer { delta },
            state.pre_image,
        ))
    }
}

impl Tool for MoveTool {
    fn name(&self) -> &'static str {
        "Move"
    }

    fn is_busy(&self) -> bool {
        self.current_state.is_some()
    }

    fn on_pointer_down(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        if status.button == MouseButton::None || self.current_state.is_some() {
            return None;
        }
        if document.canvas().active_layer().is_none() {
            trace!("move ignored press without an active layer");
            return None;
        }
        self.current_state = Some(MoveState {
            movement: LayerMovement::new(status.position),
            pre_image: document.create_memento(),
        });
        None
    }

    fn on_pointer_move(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        self.track(status.position, document);
        None
    }

    fn on_pointer_up(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        self.track(status.position, document);
        self.finish(document)
    }

    fn deactivate(&mut self, document: &mut Document) -> Option<ExecutedCommand> {
        self.finish(document)
    }
}

#[derive(Debug, Clone)]
struct RotateState {
    rotation: LayerRotation,
    pre_image: DocumentMemento,
}

/// Rotates the active layer around its pivot by dragging around it. A whole
/// gesture becomes one [`Command::RotateLayer`] with the final angle.
#[derive(Debug, Clone, Default)]
pub struct RotateTool {
    current_state: Option<RotateState>,
}

impl RotateTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(&self) -> Option<&LayerRotation> {
        self.current_state.as_ref().map(|s| &s.rotation)
    }

    /// Freezes the gesture in progress at its current angle.
    pub fn stop(&mut self) {
        if let Some(state) = &mut self.current_state {
            state.rotation.stop();
        }
    }

    fn track(&mut self, pos: Pos2, document: &mut Document) {
        let Some(state) = &mut self.current_state else {
            return;
        };
        if let Some(angle) = state.rotation.update(pos) {
            document.canvas_mut().rotate_active_layer(angle);
        }
    }

    fn finish(&mut self, document: &mut Document) -> Option<ExecutedCommand> {
        let state = self.current_state.take()?;
        let degrees = state.rotation.current_angle();
        if !degrees.is_finite() {
            warn!("dropping rotation to a non-finite angle");
            document.restore(state.pre_image);
            return None;
        }
        if degrees == state.rotation.base_angle() {
            return None;
        }
        Some(ExecutedCommand::already_applied(
            Command::RotateLayer { degrees },
            state.pre_image,
        ))
    }
}

impl Tool for RotateTool {
    fn name(&self) -> &'static str {
        "Rotate"
    }

    fn is_busy(&self) -> bool {
        self.current_state.is_some()
    }

    fn on_pointer_down(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        if status.button == MouseButton::None || self.current_state.is_some() {
            return None;
        }
        let Some(layer) = document.canvas().active_layer() else {
            trace!("rotate ignored press without an active layer");
            return None;
        };
        let rotation = LayerRotation::new(layer.pivot(), layer.rotation(), status.position);
        self.current_state = Some(RotateState {
            rotation,
            pre_image: document.create_memento(),
        });
        None
    }

    fn on_pointer_move(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        self.track(status.position, document);
        None
    }

    fn on_pointer_up(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        self.track(status.position, document);
        self.finish(document)
    }

    fn deactivate(&mut self, document: &mut Document) -> Option<ExecutedCommand> {
        self.finish(document)
    }

    fn draw(&self, renderer: &mut dyn Renderer, viewport: &Viewport) {
        let Some(state) = &self.current_state else {
            return;
        };
        renderer.set_border_color(Color::BLACK);
        renderer.set_line_width(1.0);
        renderer.draw_line(
            viewport.to_screen(state.rotation.anchor()),
            viewport.to_screen(state.rotation.last),
        );
    }
}

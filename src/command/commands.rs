use egui::Vec2;
use log::debug;

use super::{CommandError, CommandResult};
use crate::color::Color;
use crate::document::Document;
use crate::error::CanvasError;
use crate::layer::Layer;
use crate::memento::DocumentMemento;
use crate::stroke::Stroke;

/// A reversible user operation on a [`Document`].
///
/// Commands only carry their parameters. Undo does not compute an inverse;
/// it restores the snapshot taken right before the command ran (see
/// [`ExecutedCommand`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Adds a layer on top of the stack and selects it
    AddLayer { layer: Layer },

    RemoveLayer { index: usize },

    /// Moves a layer `delta` positions up (positive) or down the stack
    ChangeLayerDepth { index: usize, delta: isize },

    SelectLayer { index: usize },

    /// Translates the active layer
    MoveLayer { delta: Vec2 },

    /// Sets the rotation of the active layer, in degrees
    RotateLayer { degrees: f32 },

    /// Writes the stroke's pixels into the active layer
    Stroke { stroke: Stroke },

    /// Changes the document's drawing color
    ChangeColor { color: Color },

    ToggleVisibility { index: usize },

    RenameLayer { index: usize, name: String },

    SetLayerAlpha { index: usize, alpha: f32 },
}

fn require_index(document: &Document, index: usize) -> Result<(), CanvasError> {
    let len = document.canvas().layers().len();
    if index < len {
        Ok(())
    } else {
        Err(CanvasError::LayerIndexOutOfRange { index, len })
    }
}

fn require_active(document: &Document) -> Result<(), CanvasError> {
    document
        .canvas()
        .active_layer()
        .map(|_| ())
        .ok_or(CanvasError::NoActiveLayer)
}

fn require_finite(value: f32, what: &str) -> CommandResult {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CommandError::InvalidParameters(format!("{what} must be finite, got {value}")))
    }
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddLayer { .. } => "AddLayer",
            Command::RemoveLayer { .. } => "RemoveLayer",
            Command::ChangeLayerDepth { .. } => "ChangeLayerDepth",
            Command::SelectLayer { .. } => "SelectLayer",
            Command::MoveLayer { .. } => "MoveLayer",
            Command::RotateLayer { .. } => "RotateLayer",
            Command::Stroke { .. } => "Stroke",
            Command::ChangeColor { .. } => "ChangeColor",
            Command::ToggleVisibility { .. } => "ToggleVisibility",
            Command::RenameLayer { .. } => "RenameLayer",
            Command::SetLayerAlpha { .. } => "SetLayerAlpha",
        }
    }

    /// Performs the mutation. Every check happens before the document is
    /// touched, so a failed command leaves it unchanged.
    pub fn apply(&self, document: &mut Document) -> CommandResult {
        match self {
            Command::AddLayer { layer } => {
                document.canvas_mut().add_layer(layer.clone());
            }
            Command::RemoveLayer { index } => {
                require_index(document, *index)?;
                document.canvas_mut().remove_layer(*index);
            }
            Command::ChangeLayerDepth { index, delta } => {
                document.canvas_mut().change_depth_index(*index, *delta);
            }
            Command::SelectLayer { index } => {
                require_index(document, *index)?;
                document.canvas_mut().select_layer(*index);
            }
            Command::MoveLayer { delta } => {
                require_finite(delta.x, "move delta")?;
                require_finite(delta.y, "move delta")?;
                require_active(document)?;
                document.canvas_mut().move_active_layer(*delta);
            }
            Command::RotateLayer { degrees } => {
                require_finite(*degrees, "rotation")?;
                require_active(document)?;
                document.canvas_mut().rotate_active_layer(*degrees);
            }
            Command::Stroke { stroke } => {
                require_active(document)?;
                document.canvas_mut().set_active_layer_pixels(stroke.pixels());
            }
            Command::ChangeColor { color } => {
                document.set_color(*color);
            }
            Command::ToggleVisibility { index } => {
                document.canvas_mut().toggle_visibility(*index);
            }
            Command::RenameLayer { index, name } => {
                require_index(document, *index)?;
                document.canvas_mut().set_layer_name(*index, name);
            }
            Command::SetLayerAlpha { index, alpha } => {
                require_finite(*alpha, "alpha")?;
                require_index(document, *index)?;
                document.canvas_mut().set_layer_alpha(*index, *alpha);
            }
        }
        Ok(())
    }
}

/// A command that has been applied, together with the document state from
/// right before it was.
#[derive(Debug, Clone)]
pub struct ExecutedCommand {
    command: Command,
    pre_image: DocumentMemento,
}

impl ExecutedCommand {
    /// Snapshots `document` and applies `command` to it.
    pub fn execute(command: Command, document: &mut Document) -> Result<Self, CommandError> {
        let pre_image = document.create_memento();
        command.apply(document)?;
        debug!("executed {}", command.name());
        Ok(Self { command, pre_image })
    }

    /// Wraps a command whose effect is already on the document, e.g. one a
    /// tool applied live during a gesture. `pre_image` must be the state from
    /// before the first live change.
    pub fn already_applied(command: Command, pre_image: DocumentMemento) -> Self {
        Self { command, pre_image }
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn pre_image(&self) -> &DocumentMemento {
        &self.pre_image
    }

    /// Rolls `document` back to the pre-image and hands back the bare
    /// command so it can be executed again.
    pub fn revert(self, document: &mut Document) -> Command {
        debug!("reverting {}", self.command.name());
        document.restore(self.pre_image);
        self.command
    }
}

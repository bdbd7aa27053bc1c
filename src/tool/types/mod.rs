pub mod doodle;
pub mod pencil;
pub mod transform;

pub use doodle::DoodleTool;
pub use pencil::PencilTool;
pub use transform::{LayerMovement, LayerRotation, MoveTool, RotateTool, mouse_angle};

use serde::{Deserialize, Serialize};

use super::Tool;
use crate::command::ExecutedCommand;
use crate::config::EditorConfig;
use crate::document::Document;
use crate::input::MouseStatus;
use crate::renderer::{Renderer, Viewport};

/// Identifies a tool without its gesture state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Pencil,
    Eraser,
    Move,
    Rotate,
    Doodle,
}

/// Enum representing all available tools
#[derive(Debug, Clone)]
pub enum ToolType {
    Pencil(PencilTool),
    Eraser(PencilTool),
    Move(MoveTool),
    Rotate(RotateTool),
    Doodle(DoodleTool),
}

impl ToolType {
    /// Fresh tool of the given kind, set up from `config`.
    pub fn new(kind: ToolKind, config: &EditorConfig) -> Self {
        match kind {
            ToolKind::Pencil => Self::Pencil(PencilTool::new(config.pencil_diameter)),
            ToolKind::Eraser => Self::Eraser(PencilTool::eraser(config.eraser_diameter)),
            ToolKind::Move => Self::Move(MoveTool::new()),
            ToolKind::Rotate => Self::Rotate(RotateTool::new()),
            ToolKind::Doodle => Self::Doodle(DoodleTool::new(config.doodle_line_width)),
        }
    }

    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Pencil(_) => ToolKind::Pencil,
            Self::Eraser(_) => ToolKind::Eraser,
            Self::Move(_) => ToolKind::Move,
            Self::Rotate(_) => ToolKind::Rotate,
            Self::Doodle(_) => ToolKind::Doodle,
        }
    }

    fn as_tool(&self) -> &dyn Tool {
        match self {
            Self::Pencil(tool) | Self::Eraser(tool) => tool,
            Self::Move(tool) => tool,
            Self::Rotate(tool) => tool,
            Self::Doodle(tool) => tool,
        }
    }

    fn as_tool_mut(&mut self) -> &mut dyn Tool {
        match self {
            Self::Pencil(tool) | Self::Eraser(tool) => tool,
            Self::Move(tool) => tool,
            Self::Rotate(tool) => tool,
            Self::Doodle(tool) => tool,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        self.as_tool().name()
    }

    fn is_busy(&self) -> bool {
        self.as_tool().is_busy()
    }

    fn on_pointer_down(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        self.as_tool_mut().on_pointer_down(status, document)
    }

    fn on_pointer_move(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        self.as_tool_mut().on_pointer_move(status, document)
    }

    fn on_pointer_up(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        self.as_tool_mut().on_pointer_up(status, document)
    }

    fn deactivate(&mut self, document: &mut Document) -> Option<ExecutedCommand> {
        self.as_tool_mut().deactivate(document)
    }

    fn draw(&self, renderer: &mut dyn Renderer, viewport: &Viewport) {
        self.as_tool().draw(renderer, viewport);
    }
}

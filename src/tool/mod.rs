pub mod types;
mod trait_def;

pub use trait_def::Tool;
pub use types::{ToolKind, ToolType};

// Re-export specific tool implementations
pub use types::doodle::DoodleTool;
pub use types::pencil::PencilTool;
pub use types::transform::{LayerMovement, LayerRotation, MoveTool, RotateTool};

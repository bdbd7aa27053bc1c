mod commands;
mod history;

use thiserror::Error;

use crate::error::CanvasError;

pub use commands::{Command, ExecutedCommand};
pub use history::{CommandHistory, DEFAULT_HISTORY_CAPACITY};

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur during command execution
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// The command targets something the document does not have
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// The command parameters are invalid
    #[error("invalid command parameters: {0}")]
    InvalidParameters(String),
}

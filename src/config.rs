use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::command::DEFAULT_HISTORY_CAPACITY;
use crate::error::{CanvasError, MAX_DIMENSION, check_dimensions};
use crate::tool::ToolKind;

/// Errors that can occur while loading an editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid canvas size: {0}")]
    Canvas(#[from] CanvasError),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Settings an [`crate::Editor`] is created with.
///
/// Every field has a default, so a partial JSON object is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old configs
pub struct EditorConfig {
    /// Entries kept on each of the undo and redo stacks
    pub history_capacity: usize,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Pencil diameter in pixels
    pub pencil_diameter: u32,
    /// Eraser diameter in pixels
    pub eraser_diameter: u32,
    pub doodle_line_width: f32,
    /// Drawing color of a new document
    pub initial_color: Color,
    /// Tool active when the editor starts
    pub default_tool: ToolKind,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            canvas_width: 800,
            canvas_height: 600,
            pencil_diameter: 3,
            eraser_diameter: 10,
            doodle_line_width: 2.0,
            initial_color: Color::BLACK,
            default_tool: ToolKind::Pencil,
        }
    }
}

impl EditorConfig {
    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::InvalidValue("history_capacity must be at least 1".into()));
        }
        check_dimensions(self.canvas_width, self.canvas_height)?;
        for (name, diameter) in [
            ("pencil_diameter", self.pencil_diameter),
            ("eraser_diameter", self.eraser_diameter),
        ] {
            if !(1..=MAX_DIMENSION).contains(&diameter) {
                return Err(ConfigError::InvalidValue(format!(
                    "{name} must be in 1..={MAX_DIMENSION}, got {diameter}"
                )));
            }
        }
        if !(self.doodle_line_width.is_finite() && self.doodle_line_width > 0.0) {
            return Err(ConfigError::InvalidValue(format!(
                "doodle_line_width must be positive, got {}",
                self.doodle_line_width
            )));
        }
        Ok(())
    }
}

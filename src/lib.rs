#![warn(clippy::all, rust_2018_idioms)]

pub mod canvas;
pub mod color;
pub mod command;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod input;
pub mod layer;
pub mod layer_manager;
pub mod listener;
pub mod memento;
pub mod raster;
pub mod renderer;
pub mod stroke;
pub mod tool;

pub use canvas::Canvas;
pub use color::Color;
pub use command::{Command, CommandError, CommandHistory, CommandResult, ExecutedCommand};
pub use config::{ConfigError, EditorConfig};
pub use document::Document;
pub use editor::Editor;
pub use error::CanvasError;
pub use input::{InputEvent, MouseButton, MouseStatus};
pub use layer::{Layer, LayerContent, factory};
pub use layer_manager::LayerManager;
pub use listener::{CanvasUpdateListener, LayerUpdateEvent, LayerUpdateKind, LayerUpdateListener};
pub use memento::{CanvasMemento, DocumentMemento};
pub use raster::{Pixel, RasterData};
pub use renderer::{Renderer, Viewport};
pub use stroke::{Stroke, StrokeBuilder};
pub use tool::{Tool, ToolKind, ToolType};

//! The editing session: a document, its undo history and the active tool.
//!
//! The `Editor` is the single entry point the surrounding application drives.
//! Pointer events are routed to the active tool, the commands tools produce
//! are recorded in the history, and direct operations (adding layers,
//! changing the color, ...) go through [`Editor::execute`] so they are
//! undoable too.
//!
//! # Gestures and history
//!
//! A tool holds a snapshot of the document from the moment its gesture
//! started. Switching tools, undoing or redoing while a gesture is still in
//! progress first completes that gesture, so the snapshot is always recorded
//! against the history position it was taken at.
//!
//! # Example
//!
//! ```
//! use layered_canvas::{Command, Editor, EditorConfig, InputEvent, MouseStatus, ToolKind};
//!
//! let mut editor = Editor::new(EditorConfig {
//!     canvas_width: 64,
//!     canvas_height: 64,
//!     ..EditorConfig::default()
//! })?;
//! let layer = editor.document().canvas().new_raster_layer("Background")?;
//! editor.execute(Command::AddLayer { layer })?;
//!
//! editor.set_tool(ToolKind::Move);
//! editor.handle_input(InputEvent::Pressed(MouseStatus::primary(10.0, 10.0)));
//! editor.handle_input(InputEvent::Released(MouseStatus::primary(20.0, 15.0)));
//! assert_eq!(editor.history().undo_len(), 2);
//!
//! editor.undo();
//! assert_eq!(editor.document().canvas().layers()[0].position().x, 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use log::{debug, info, warn};

use crate::color::Color;
use crate::command::{Command, CommandError, CommandHistory, CommandResult, ExecutedCommand};
use crate::config::{ConfigError, EditorConfig};
use crate::document::Document;
use crate::input::InputEvent;
use crate::renderer::{Renderer, Viewport};
use crate::tool::{Tool, ToolKind, ToolType};

#[derive(Debug)]
pub struct Editor {
    document: Document,
    history: CommandHistory,
    tool: ToolType,
    config: EditorConfig,
}

impl Editor {
    /// Creates an editor with an empty canvas of the configured size.
    pub fn new(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut document = Document::new(config.canvas_width, config.canvas_height)?;
        document.set_color(config.initial_color);
        info!(
            "new editor with a {}x{} canvas, history capacity {}",
            config.canvas_width, config.canvas_height, config.history_capacity
        );
        Ok(Self {
            document,
            history: CommandHistory::with_capacity(config.history_capacity),
            tool: ToolType::new(config.default_tool, &config),
            config,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Direct access to the document. Changes made through this bypass the
    /// history and cannot be undone.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn tool_mut(&mut self) -> &mut ToolType {
        &mut self.tool
    }

    fn record(&mut self, executed: Option<ExecutedCommand>) {
        if let Some(executed) = executed {
            self.history.record(executed);
        }
    }

    /// Completes a gesture in progress, recording its command.
    pub fn finish_gesture(&mut self) {
        if self.tool.is_busy() {
            debug!("finishing {} gesture early", self.tool.name());
            let executed = self.tool.deactivate(&mut self.document);
            self.record(executed);
        }
    }

    /// Activates a fresh tool of `kind`.
    pub fn set_tool(&mut self, kind: ToolKind) {
        self.finish_gesture();
        self.tool = ToolType::new(kind, &self.config);
        debug!("active tool is now {}", self.tool.name());
    }

    /// Feeds one pointer event to the active tool.
    pub fn handle_input(&mut self, event: InputEvent) {
        let status = event.status();
        let executed = match event {
            InputEvent::Pressed(_) => self.tool.on_pointer_down(status, &mut self.document),
            InputEvent::Dragged(_) => self.tool.on_pointer_move(status, &mut self.document),
            InputEvent::Released(_) => self.tool.on_pointer_up(status, &mut self.document),
        };
        self.record(executed);
    }

    /// Executes `command` and records it. A failing command changes nothing
    /// and is not recorded.
    pub fn execute(&mut self, command: Command) -> CommandResult {
        self.finish_gesture();
        self.history.execute(command, &mut self.document)
    }

    /// Changes the drawing color as an undoable step.
    pub fn set_color(&mut self, color: Color) -> CommandResult {
        self.execute(Command::ChangeColor { color })
    }

    pub fn undo(&mut self) -> bool {
        self.finish_gesture();
        self.history.undo(&mut self.document)
    }

    pub fn redo(&mut self) -> Result<bool, CommandError> {
        self.finish_gesture();
        self.history.redo(&mut self.document).inspect_err(|err| {
            warn!("redo failed: {err}");
        })
    }

    /// Draws the canvas and the active tool's feedback on top of it.
    pub fn draw(&self, renderer: &mut dyn Renderer, viewport: &Viewport) {
        self.document.canvas().draw(renderer, viewport);
        self.tool.draw(renderer, viewport);
    }
}

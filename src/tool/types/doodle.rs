use egui::Pos2;
use log::{trace, warn};

use crate::command::{Command, ExecutedCommand};
use crate::document::Document;
use crate::input::{MouseButton, MouseStatus};
use crate::layer::{Layer, LayerContent, factory};
use crate::renderer::{Renderer, Viewport};
use crate::tool::Tool;

/// Draws freehand polylines, each gesture into a new doodle layer.
///
/// The doodle in progress lives in the tool and is only drawn as a preview;
/// the release adds it to the canvas through [`Command::AddLayer`].
#[derive(Debug, Clone)]
pub struct DoodleTool {
    pub line_width: f32,
    current: Option<Layer>,
}

impl DoodleTool {
    pub fn new(line_width: f32) -> Self {
        Self {
            line_width,
            current: None,
        }
    }

    /// The doodle being drawn, if any.
    pub fn current(&self) -> Option<&Layer> {
        self.current.as_ref()
    }

    /// Appends `pos` to the doodle in progress and repaints its preview.
    fn append(&mut self, pos: Pos2, document: &Document) {
        let Some(layer) = &mut self.current else {
            return;
        };
        let offset = pos - layer.position();
        if let LayerContent::Doodle(doodle) = layer.content_mut() {
            if doodle.points().last() != Some(&offset) {
                doodle.add_point(offset);
                document.canvas().request_repaint();
            }
        }
    }

    fn finish(&mut self, document: &mut Document) -> Option<ExecutedCommand> {
        let layer = self.current.take()?;
        match ExecutedCommand::execute(Command::AddLayer { layer }, document) {
            Ok(executed) => Some(executed),
            Err(err) => {
                warn!("dropping doodle: {err}");
                None
            }
        }
    }
}

impl Tool for DoodleTool {
    fn name(&self) -> &'static str {
        "Doodle"
    }

    fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    fn on_pointer_down(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        if status.button == MouseButton::None || self.current.is_some() {
            return None;
        }
        let name = format!("Doodle {}", document.canvas().layers().len() + 1);
        trace!("starting {name}");
        self.current = Some(factory::create_doodle(
            &name,
            status.position,
            document.color(),
            self.line_width,
        ));
        self.append(status.position, document);
        None
    }

    fn on_pointer_move(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        self.append(status.position, document);
        None
    }

    fn on_pointer_up(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        self.append(status.position, document);
        self.finish(document)
    }

    fn deactivate(&mut self, document: &mut Document) -> Option<ExecutedCommand> {
        self.finish(document)
    }

    fn draw(&self, renderer: &mut dyn Renderer, viewport: &Viewport) {
        if let Some(layer) = &self.current {
            layer.draw(renderer, viewport);
        }
    }
}

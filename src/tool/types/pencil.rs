use egui::{Pos2, Rect, Vec2};
use log::trace;

use crate::color::Color;
use crate::command::{Command, ExecutedCommand};
use crate::document::Document;
use crate::input::{MouseButton, MouseStatus};
use crate::memento::DocumentMemento;
use crate::renderer::{Renderer, Viewport};
use crate::stroke::StrokeBuilder;
use crate::tool::Tool;

/// State for the pencil's current stroke
#[derive(Debug, Clone)]
struct PencilState {
    stroke: StrokeBuilder,
    pre_image: DocumentMemento,
}

/// Raster pen: paints round dabs into the active raster layer.
///
/// Pixels are written as the pointer moves; the release turns the whole
/// stroke into a single [`Command::Stroke`].
#[derive(Debug, Clone)]
pub struct PencilTool {
    /// Brush diameter in pixels
    pub diameter: u32,
    /// Paints fully transparent pixels instead of the document color
    pub erase: bool,
    current_state: Option<PencilState>,
    cursor: Option<Pos2>,
}

impl PencilTool {
    pub fn new(diameter: u32) -> Self {
        Self {
            diameter: diameter.max(1),
            erase: false,
            current_state: None,
            cursor: None,
        }
    }

    pub fn eraser(diameter: u32) -> Self {
        Self {
            erase: true,
            ..Self::new(diameter)
        }
    }

    /// Maps `pos` into the active raster layer, if there is one.
    fn local_position(document: &Document, pos: Pos2) -> Option<Pos2> {
        let layer = document.canvas().active_layer()?;
        layer.raster()?;
        Some(layer.to_local(pos))
    }

    fn paint_to(&mut self, pos: Pos2, document: &mut Document) {
        self.cursor = Some(pos);
        let Some(state) = &mut self.current_state else {
            return;
        };
        let Some(local) = Self::local_position(document, pos) else {
            return;
        };
        let added = state.stroke.add_point(local);
        let written = document.canvas_mut().set_active_layer_pixels(&added);
        trace!("{} painted {written} of {} new pixels", self.name(), added.len());
    }

    fn finish_stroke(&mut self) -> Option<ExecutedCommand> {
        let state = self.current_state.take()?;
        let stroke = state.stroke.finish();
        if stroke.is_empty() {
            return None;
        }
        Some(ExecutedCommand::already_applied(
            Command::Stroke { stroke },
            state.pre_image,
        ))
    }
}

impl Tool for PencilTool {
    fn name(&self) -> &'static str {
        if self.erase { "Eraser" } else { "Pencil" }
    }

    fn is_busy(&self) -> bool {
        self.current_state.is_some()
    }

    fn on_pointer_down(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        self.cursor = Some(status.position);
        if status.button == MouseButton::None || self.current_state.is_some() {
            return None;
        }
        let Some(raster) = document.canvas().active_layer().and_then(|layer| layer.raster()) else {
            trace!("{} ignored press without an active raster layer", self.name());
            return None;
        };
        let (width, height) = (raster.width(), raster.height());

        let color = if self.erase { Color::TRANSPARENT } else { document.color() };
        self.current_state = Some(PencilState {
            stroke: StrokeBuilder::clipped(color, self.diameter, width, height),
            pre_image: document.create_memento(),
        });
        self.paint_to(status.position, document);
        None
    }

    fn on_pointer_move(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        self.paint_to(status.position, document);
        None
    }

    fn on_pointer_up(&mut self, status: MouseStatus, document: &mut Document) -> Option<ExecutedCommand> {
        self.paint_to(status.position, document);
        self.finish_stroke()
    }

    fn deactivate(&mut self, _document: &mut Document) -> Option<ExecutedCommand> {
        self.cursor = None;
        self.finish_stroke()
    }

    fn draw(&self, renderer: &mut dyn Renderer, viewport: &Viewport) {
        let Some(cursor) = self.cursor else {
            return;
        };
        let size = Vec2::splat(self.diameter as f32 * viewport.zoom);
        renderer.set_border_color(Color::BLACK);
        renderer.set_fill_color(Color::TRANSPARENT);
        renderer.set_border_width(1.0);
        renderer.draw_ellipse(Rect::from_center_size(viewport.to_screen(cursor), size), 0.0);
    }
}

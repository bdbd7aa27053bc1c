use egui::{Pos2, Rect, Vec2};
use log::trace;
use uuid::Uuid;

use crate::color::Color;
use crate::raster::RasterData;
use crate::renderer::{Renderer, Viewport};

mod common;
mod doodle;
mod shape;
mod text;

pub use common::LayerProperties;
pub use doodle::Doodle;
pub use shape::{Shape, ShapeKind};
pub use text::TextContent;

pub(crate) use common::rotate_vec;

/// Content of a layer.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerContent {
    Raster(RasterData),
    Shape(Shape),
    Doodle(Doodle),
    Text(TextContent),
}

/// One independently positioned and ordered unit of canvas content.
///
/// Cloning a layer is a deep copy that keeps the id, so a clone compares
/// equal to its source until either is modified.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    id: Uuid,
    props: LayerProperties,
    content: LayerContent,
}

impl Layer {
    pub fn new(props: LayerProperties, content: LayerContent) -> Self {
        Self {
            id: Uuid::new_v4(),
            props,
            content,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind_name(&self) -> &'static str {
        match self.content {
            LayerContent::Raster(_) => "raster",
            LayerContent::Shape(_) => "shape",
            LayerContent::Doodle(_) => "doodle",
            LayerContent::Text(_) => "text",
        }
    }

    pub fn properties(&self) -> &LayerProperties {
        &self.props
    }

    pub fn content(&self) -> &LayerContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut LayerContent {
        &mut self.content
    }

    pub fn name(&self) -> &str {
        &self.props.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.props.name = name.into();
    }

    pub fn position(&self) -> Pos2 {
        self.props.position
    }

    pub fn set_position(&mut self, position: Pos2) {
        self.props.position = position;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.props.position += delta;
    }

    pub fn depth(&self) -> usize {
        self.props.depth
    }

    pub(crate) fn set_depth(&mut self, depth: usize) {
        self.props.depth = depth;
    }

    pub fn is_visible(&self) -> bool {
        self.props.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.props.visible = visible;
    }

    pub fn rotation(&self) -> f32 {
        self.props.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.props.rotation = degrees;
    }

    pub fn alpha(&self) -> f32 {
        self.props.alpha
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.props.alpha = common::clamp_alpha(alpha);
    }

    pub fn raster(&self) -> Option<&RasterData> {
        match &self.content {
            LayerContent::Raster(raster) => Some(raster),
            _ => None,
        }
    }

    /// Size of the layer's content, if it has a fixed extent.
    pub fn size(&self) -> Option<Vec2> {
        match &self.content {
            LayerContent::Raster(raster) => {
                Some(Vec2::new(raster.width() as f32, raster.height() as f32))
            }
            LayerContent::Shape(shape) => Some(shape.size()),
            LayerContent::Doodle(_) | LayerContent::Text(_) => None,
        }
    }

    /// Point the layer rotates around: its center when the size is known,
    /// otherwise its position.
    pub fn pivot(&self) -> Pos2 {
        match self.size() {
            Some(size) => self.props.position + size / 2.0,
            None => self.props.position,
        }
    }

    /// Maps a canvas position into the unrotated, untranslated coordinate
    /// space of this layer's content.
    pub fn to_local(&self, canvas_pos: Pos2) -> Pos2 {
        let pivot = self.pivot();
        let pivot_offset = pivot - self.props.position;
        Pos2::ZERO + rotate_vec(canvas_pos - pivot, -self.props.rotation) + pivot_offset
    }

    /// Maps a layer-local position back onto the canvas.
    pub fn to_canvas(&self, local: Pos2) -> Pos2 {
        let pivot = self.pivot();
        let pivot_offset = pivot - self.props.position;
        pivot + rotate_vec(local.to_vec2() - pivot_offset, self.props.rotation)
    }

    /// Writes a pixel in layer-local coordinates. Only raster layers accept
    /// writes; out-of-range coordinates are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        match &mut self.content {
            LayerContent::Raster(raster) => raster.set_pixel(x, y, color),
            _ => false,
        }
    }

    /// The layer's pixels, computing them for procedural content. Doodle and
    /// text layers have no pixel representation.
    pub fn pixel_data(&self) -> Option<RasterData> {
        match &self.content {
            LayerContent::Raster(raster) => Some(raster.clone()),
            LayerContent::Shape(shape) => shape.pixel_data().ok(),
            LayerContent::Doodle(_) | LayerContent::Text(_) => None,
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, viewport: &Viewport) {
        if !self.props.visible {
            return;
        }
        let origin = viewport.to_screen(self.props.position);
        let rotation = self.props.rotation;
        let alpha = self.props.alpha;

        match &self.content {
            LayerContent::Raster(raster) => {
                renderer.draw_image(raster, origin, viewport.zoom, rotation, alpha);
            }
            LayerContent::Shape(shape) => {
                renderer.set_fill_color(faded(shape.fill, alpha));
                renderer.set_border_color(faded(shape.border, alpha));
                renderer.set_border_width(shape.border_width as f32 * viewport.zoom);
                let rect = viewport.rect_to_screen(Rect::from_min_size(self.props.position, shape.size()));
                match shape.kind {
                    ShapeKind::Rectangle => renderer.draw_rect(rect, rotation),
                    ShapeKind::Ellipse => renderer.draw_ellipse(rect, rotation),
                }
            }
            LayerContent::Doodle(doodle) => {
                renderer.set_border_color(faded(doodle.color, alpha));
                renderer.set_line_width(doodle.line_width * viewport.zoom);
                for (from, to) in doodle.segments() {
                    let from = viewport.to_screen(self.to_canvas(Pos2::ZERO + from));
                    let to = viewport.to_screen(self.to_canvas(Pos2::ZERO + to));
                    renderer.draw_line(from, to);
                }
            }
            LayerContent::Text(_) => trace!("skipping text layer {}", self.id),
        }
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    color.with_alpha((f32::from(color.alpha()) * alpha).round() as i32)
}

/// Constructors for every layer variant.
pub mod factory {
    use egui::{Pos2, Rect};

    use super::{Doodle, Layer, LayerContent, LayerProperties, Shape, ShapeKind, TextContent};
    use crate::color::Color;
    use crate::error::CanvasError;
    use crate::raster::RasterData;

    /// Transparent raster layer at the canvas origin.
    pub fn create_raster(name: &str, width: u32, height: u32) -> Result<Layer, CanvasError> {
        Ok(create_raster_from(name, RasterData::new(width, height)?))
    }

    pub fn create_raster_from(name: &str, raster: RasterData) -> Layer {
        Layer::new(LayerProperties::new(name, Pos2::ZERO), LayerContent::Raster(raster))
    }

    pub fn create_rectangle(
        name: &str,
        rect: Rect,
        fill: Color,
        border: Color,
        border_width: u32,
    ) -> Result<Layer, CanvasError> {
        create_shape(name, ShapeKind::Rectangle, rect, fill, border, border_width)
    }

    pub fn create_ellipse(
        name: &str,
        rect: Rect,
        fill: Color,
        border: Color,
        border_width: u32,
    ) -> Result<Layer, CanvasError> {
        create_shape(name, ShapeKind::Ellipse, rect, fill, border, border_width)
    }

    fn create_shape(
        name: &str,
        kind: ShapeKind,
        rect: Rect,
        fill: Color,
        border: Color,
        border_width: u32,
    ) -> Result<Layer, CanvasError> {
        let width = rect.width().max(0.0).round() as u32;
        let height = rect.height().max(0.0).round() as u32;
        crate::error::check_dimensions(width, height)?;
        let shape = Shape {
            kind,
            width,
            height,
            fill,
            border,
            border_width,
        };
        Ok(Layer::new(LayerProperties::new(name, rect.min), LayerContent::Shape(shape)))
    }

    /// Empty doodle anchored at `position`.
    pub fn create_doodle(name: &str, position: Pos2, color: Color, line_width: f32) -> Layer {
        Layer::new(
            LayerProperties::new(name, position),
            LayerContent::Doodle(Doodle::new(color, line_width)),
        )
    }

    pub fn create_text(name: &str, position: Pos2, text: &str, font_size: f32, color: Color) -> Layer {
        let content = TextContent {
            text: text.to_owned(),
            font_size,
            color,
        };
        Layer::new(LayerProperties::new(name, position), LayerContent::Text(content))
    }
}

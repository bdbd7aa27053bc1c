use egui::{Pos2, Rect, Vec2};

use crate::color::Color;
use crate::raster::RasterData;

/// Drawing surface the canvas paints itself onto.
///
/// The core never composites pixels to a screen; a windowing layer implements
/// this trait and turns the calls into real draw operations. Shapes are given
/// in screen coordinates, rotations in degrees around the shape's center.
pub trait Renderer {
    fn set_fill_color(&mut self, color: Color);

    fn set_border_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    fn set_border_width(&mut self, width: f32);

    fn draw_rect(&mut self, rect: Rect, rotation: f32);

    fn draw_ellipse(&mut self, rect: Rect, rotation: f32);

    /// Draws a pixel grid with its top-left corner at `origin`, scaled by
    /// `scale` and rotated around its center.
    fn draw_image(&mut self, image: &RasterData, origin: Pos2, scale: f32, rotation: f32, alpha: f32);

    fn draw_text(&mut self, text: &str, position: Pos2);

    fn draw_line(&mut self, from: Pos2, to: Pos2);
}

/// Mapping between canvas coordinates and screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Screen position of the canvas origin.
    pub offset: Vec2,
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(offset: Vec2, zoom: f32) -> Self {
        Self { offset, zoom }
    }

    pub fn to_screen(&self, canvas_pos: Pos2) -> Pos2 {
        (canvas_pos.to_vec2() * self.zoom + self.offset).to_pos2()
    }

    pub fn to_canvas(&self, screen_pos: Pos2) -> Pos2 {
        ((screen_pos.to_vec2() - self.offset) / self.zoom).to_pos2()
    }

    pub fn rect_to_screen(&self, rect: Rect) -> Rect {
        Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max))
    }
}

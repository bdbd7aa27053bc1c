#![allow(dead_code)]

use egui::{Pos2, Rect};
use layered_canvas::{Color, Document, RasterData, Renderer};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Document with one transparent raster layer covering the canvas
pub fn document_with_layer(width: u32, height: u32) -> Document {
    let mut document = Document::new(width, height).unwrap();
    let layer = document.canvas().new_raster_layer("Background").unwrap();
    document.canvas_mut().add_layer(layer);
    document
}

pub fn active_pixel(document: &Document, x: i32, y: i32) -> Color {
    document
        .canvas()
        .active_layer()
        .and_then(|layer| layer.raster())
        .map(|raster| raster.get_pixel(x, y).unwrap().color)
        .unwrap()
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    FillColor(Color),
    BorderColor(Color),
    LineWidth(f32),
    BorderWidth(f32),
    Rect(Rect, f32),
    Ellipse(Rect, f32),
    Image {
        width: u32,
        height: u32,
        origin: Pos2,
        scale: f32,
        rotation: f32,
        alpha: f32,
    },
    Text(String, Pos2),
    Line(Pos2, Pos2),
}

/// Renderer that only remembers what it was asked to draw
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    /// Calls that put something on screen, without the state setters
    pub fn shapes(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|call| {
                matches!(
                    call,
                    DrawCall::Rect(..)
                        | DrawCall::Ellipse(..)
                        | DrawCall::Image { .. }
                        | DrawCall::Text(..)
                        | DrawCall::Line(..)
                )
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn set_fill_color(&mut self, color: Color) {
        self.calls.push(DrawCall::FillColor(color));
    }

    fn set_border_color(&mut self, color: Color) {
        self.calls.push(DrawCall::BorderColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.calls.push(DrawCall::LineWidth(width));
    }

    fn set_border_width(&mut self, width: f32) {
        self.calls.push(DrawCall::BorderWidth(width));
    }

    fn draw_rect(&mut self, rect: Rect, rotation: f32) {
        self.calls.push(DrawCall::Rect(rect, rotation));
    }

    fn draw_ellipse(&mut self, rect: Rect, rotation: f32) {
        self.calls.push(DrawCall::Ellipse(rect, rotation));
    }

    fn draw_image(&mut self, image: &RasterData, origin: Pos2, scale: f32, rotation: f32, alpha: f32) {
        self.calls.push(DrawCall::Image {
            width: image.width(),
            height: image.height(),
            origin,
            scale,
            rotation,
            alpha,
        });
    }

    fn draw_text(&mut self, text: &str, position: Pos2) {
        self.calls.push(DrawCall::Text(text.to_owned(), position));
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2) {
        self.calls.push(DrawCall::Line(from, to));
    }
}

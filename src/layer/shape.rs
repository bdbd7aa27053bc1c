use egui::Vec2;

use crate::color::Color;
use crate::error::CanvasError;
use crate::raster::RasterData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

/// A procedural layer; its pixels are computed whenever they are asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub width: u32,
    pub height: u32,
    pub fill: Color,
    pub border: Color,
    pub border_width: u32,
}

impl Shape {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Rasterizes the shape into a grid of its own size.
    pub fn pixel_data(&self) -> Result<RasterData, CanvasError> {
        let mut raster = RasterData::new(self.width, self.height)?;
        let border = self.border_width as i32;
        let (w, h) = (self.width as i32, self.height as i32);

        for y in 0..h {
            for x in 0..w {
                let color = match self.kind {
                    ShapeKind::Rectangle => {
                        let edge = x.min(y).min(w - 1 - x).min(h - 1 - y);
                        if edge < border { self.border } else { self.fill }
                    }
                    ShapeKind::Ellipse => match ellipse_depth(x, y, self.width, self.height) {
                        None => continue,
                        Some(depth) if depth < border as f32 => self.border,
                        Some(_) => self.fill,
                    },
                };
                raster.set_pixel(x, y, color);
            }
        }
        Ok(raster)
    }
}

/// Distance in pixels (approximate) from `(x, y)` to the ellipse outline when
/// the pixel center lies inside the ellipse inscribed in `width`x`height`.
fn ellipse_depth(x: i32, y: i32, width: u32, height: u32) -> Option<f32> {
    let rx = width as f32 / 2.0;
    let ry = height as f32 / 2.0;
    let dx = (x as f32 + 0.5 - rx) / rx;
    let dy = (y as f32 + 0.5 - ry) / ry;
    let r = (dx * dx + dy * dy).sqrt();
    (r <= 1.0).then(|| (1.0 - r) * rx.min(ry))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(kind: ShapeKind) -> Shape {
        Shape {
            kind,
            width: 6,
            height: 4,
            fill: Color::RED,
            border: Color::BLACK,
            border_width: 1,
        }
    }

    #[test]
    fn test_rectangle_has_border_and_fill() {
        let raster = shape(ShapeKind::Rectangle).pixel_data().unwrap();
        assert_eq!(raster.get_pixel(0, 0).unwrap().color, Color::BLACK);
        assert_eq!(raster.get_pixel(5, 3).unwrap().color, Color::BLACK);
        assert_eq!(raster.get_pixel(2, 1).unwrap().color, Color::RED);
    }

    #[test]
    fn test_ellipse_leaves_corners_empty() {
        let raster = shape(ShapeKind::Ellipse).pixel_data().unwrap();
        assert_eq!(raster.get_pixel(0, 0).unwrap().color, Color::TRANSPARENT);
        assert_ne!(raster.get_pixel(3, 2).unwrap().color, Color::TRANSPARENT);
    }
}

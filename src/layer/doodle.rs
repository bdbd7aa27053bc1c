use egui::Vec2;

use crate::color::Color;

/// Freehand polyline. Points are stored relative to the layer position and
/// drawn as connected segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Doodle {
    points: Vec<Vec2>,
    pub color: Color,
    pub line_width: f32,
}

impl Doodle {
    pub fn new(color: Color, line_width: f32) -> Self {
        Self {
            points: Vec::new(),
            color,
            line_width,
        }
    }

    pub fn add_point(&mut self, point: Vec2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, the segments the doodle is drawn with.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

use std::collections::HashSet;

use egui::Pos2;

use crate::color::Color;
use crate::raster::Pixel;

/// The pixels touched by one continuous pencil or eraser gesture, in the
/// local coordinates of the layer they were painted on.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    color: Color,
    diameter: u32,
    pixels: Vec<Pixel>,
}

impl Stroke {
    pub fn new(color: Color, diameter: u32, pixels: Vec<Pixel>) -> Self {
        Self {
            color,
            diameter,
            pixels,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Accumulates a stroke while the pointer is down.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    color: Color,
    diameter: u32,
    pixels: Vec<Pixel>,
    seen: HashSet<(i32, i32)>,
    last_point: Option<Pos2>,
    /// Width and height of the grid the stroke is painted on
    extent: Option<(u32, u32)>,
}

impl StrokeBuilder {
    pub fn new(color: Color, diameter: u32) -> Self {
        Self {
            color,
            diameter: diameter.max(1),
            pixels: Vec::new(),
            seen: HashSet::new(),
            last_point: None,
            extent: None,
        }
    }

    /// A builder that only keeps pixels inside a `width`x`height` grid.
    pub fn clipped(color: Color, diameter: u32, width: u32, height: u32) -> Self {
        Self {
            extent: Some((width, height)),
            ..Self::new(color, diameter)
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn last_point(&self) -> Option<Pos2> {
        self.last_point
    }

    /// Stamps the brush at `point`, and along the segment from the previous
    /// point if there is one. Returns only the pixels not covered before.
    pub fn add_point(&mut self, point: Pos2) -> Vec<Pixel> {
        let mut added = Vec::new();
        match self.last_point {
            Some(last) if last.distance(point).is_finite() => {
                // Dabs overlap as long as they are at most a quarter diameter apart.
                let spacing = (self.diameter as f32 / 4.0).max(1.0);
                let steps = (last.distance(point) / spacing).ceil().max(1.0) as usize;
                for step in 1..=steps {
                    let t = step as f32 / steps as f32;
                    self.stamp(last.lerp(point, t), &mut added);
                }
            }
            _ => self.stamp(point, &mut added),
        }
        self.last_point = Some(point);
        added
    }

    fn stamp(&mut self, center: Pos2, added: &mut Vec<Pixel>) {
        if !(center.x.is_finite() && center.y.is_finite()) {
            return;
        }
        let radius = self.diameter as f32 / 2.0;
        let mut min_x = (center.x - radius).floor() as i32;
        let mut max_x = (center.x + radius).ceil() as i32;
        let mut min_y = (center.y - radius).floor() as i32;
        let mut max_y = (center.y + radius).ceil() as i32;
        if let Some((width, height)) = self.extent {
            min_x = min_x.max(0);
            min_y = min_y.max(0);
            max_x = max_x.min(i32::try_from(width).unwrap_or(i32::MAX) - 1);
            max_y = max_y.min(i32::try_from(height).unwrap_or(i32::MAX) - 1);
        }
        let origin = (center.x.floor() as i32, center.y.floor() as i32);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let inside = dx * dx + dy * dy <= radius * radius;
                if (inside || (x, y) == origin) && self.seen.insert((x, y)) {
                    let pixel = Pixel::new(x, y, self.color);
                    self.pixels.push(pixel);
                    added.push(pixel);
                }
            }
        }
    }

    pub fn finish(self) -> Stroke {
        Stroke::new(self.color, self.diameter, self.pixels)
    }
}

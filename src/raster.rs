use std::hash::{Hash, Hasher};

use image::RgbaImage;

use crate::color::Color;
use crate::error::{CanvasError, check_dimensions};

/// A colored grid coordinate.
///
/// Two pixels compare equal when their colors match, wherever they are. Use
/// [`Pixel::same_position`] to compare coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Pixel {
    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Self { x, y, color }
    }

    pub fn same_position(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl PartialEq for Pixel {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

impl Eq for Pixel {}

impl Hash for Pixel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
    }
}

/// Fixed-size grid of colors backing a raster layer.
///
/// Origin is the top-left corner. The grid is never resized after
/// construction; writes outside of it are dropped so brushes can overdraw the
/// edges, while reads outside of it are errors.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterData {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl RasterData {
    /// Creates a fully transparent grid.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self, CanvasError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> CanvasError {
        CanvasError::PixelOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Pixel, CanvasError> {
        let offset = self.offset(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        Ok(Pixel::new(x, y, self.pixels[offset]))
    }

    /// Writes one pixel. Returns `false` and changes nothing when `(x, y)` is
    /// outside of the grid.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.offset(x, y) {
            Some(offset) => {
                self.pixels[offset] = color;
                true
            }
            None => false,
        }
    }

    /// Like [`Self::set_pixel`], but reports writes outside of the grid.
    pub fn try_set_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), CanvasError> {
        if self.set_pixel(x, y, color) {
            Ok(())
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Iterates all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        let width = self.width as usize;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, color)| Pixel::new((i % width) as i32, (i / width) as i32, *color))
    }

    /// Copies the grid into an [`RgbaImage`] for an external codec.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let raw = self.pixels.iter().flat_map(|c| c.to_array()).collect();
        // The buffer length always matches width * height * 4.
        RgbaImage::from_raw(self.width, self.height, raw)
            .unwrap_or_else(|| RgbaImage::new(self.width, self.height))
    }

    pub fn from_rgba_image(image: &RgbaImage) -> Result<Self, CanvasError> {
        check_dimensions(image.width(), image.height())?;
        Ok(Self {
            width: image.width(),
            height: image.height(),
            pixels: image.pixels().map(|p| Color::from(p.0)).collect(),
        })
    }
}

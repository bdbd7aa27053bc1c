use egui::Color32;
use serde::{Deserialize, Serialize};

/// An immutable, non-premultiplied RGBA color with 8 bits per channel.
///
/// Constructors clamp every channel into `0..=255`. There are no mutating
/// methods; the `with_*` family returns a new color instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: u8,
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

fn clamp_percent(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Color {
    pub const TRANSPARENT: Self = Self::from_rgba(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgba(0, 0, 0, 255);
    pub const WHITE: Self = Self::from_rgba(255, 255, 255, 255);
    pub const RED: Self = Self::from_rgba(255, 0, 0, 255);
    pub const GREEN: Self = Self::from_rgba(0, 255, 0, 255);
    pub const BLUE: Self = Self::from_rgba(0, 0, 255, 255);

    /// Creates a color, clamping each channel into `0..=255`.
    pub fn new(red: i32, green: i32, blue: i32, alpha: i32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
            alpha: clamp_channel(alpha),
        }
    }

    /// Creates an opaque color.
    pub fn rgb(red: i32, green: i32, blue: i32) -> Self {
        Self::new(red, green, blue, 255)
    }

    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a color from fractions in `0.0..=1.0`. NaN maps to zero.
    pub fn from_percent(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red: clamp_percent(red),
            green: clamp_percent(green),
            blue: clamp_percent(blue),
            alpha: clamp_percent(alpha),
        }
    }

    pub fn red(&self) -> u8 {
        self.red
    }

    pub fn green(&self) -> u8 {
        self.green
    }

    pub fn blue(&self) -> u8 {
        self.blue
    }

    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn red_percent(&self) -> f32 {
        f32::from(self.red) / 255.0
    }

    pub fn green_percent(&self) -> f32 {
        f32::from(self.green) / 255.0
    }

    pub fn blue_percent(&self) -> f32 {
        f32::from(self.blue) / 255.0
    }

    pub fn alpha_percent(&self) -> f32 {
        f32::from(self.alpha) / 255.0
    }

    pub fn with_red(self, red: i32) -> Self {
        Self {
            red: clamp_channel(red),
            ..self
        }
    }

    pub fn with_green(self, green: i32) -> Self {
        Self {
            green: clamp_channel(green),
            ..self
        }
    }

    pub fn with_blue(self, blue: i32) -> Self {
        Self {
            blue: clamp_channel(blue),
            ..self
        }
    }

    pub fn with_alpha(self, alpha: i32) -> Self {
        Self {
            alpha: clamp_channel(alpha),
            ..self
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 4]> for Color {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::from_rgba(red, green, blue, alpha)
    }
}

impl From<Color32> for Color {
    fn from(value: Color32) -> Self {
        Self::from(value.to_srgba_unmultiplied())
    }
}

impl From<Color> for Color32 {
    fn from(value: Color) -> Self {
        Color32::from_rgba_unmultiplied(value.red, value.green, value.blue, value.alpha)
    }
}

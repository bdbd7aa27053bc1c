use crate::color::Color;

/// Text layer content. Only the data is modelled; text layers are neither
/// rasterized nor drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    pub text: String,
    pub font_size: f32,
    pub color: Color,
}

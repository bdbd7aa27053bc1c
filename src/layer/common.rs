use egui::{Pos2, Vec2};

/// Attributes every layer variant shares.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerProperties {
    pub(crate) name: String,
    /// Canvas position of the layer's top-left corner.
    pub(crate) position: Pos2,
    /// Z-order; kept contiguous `0..n` by the owning manager.
    pub(crate) depth: usize,
    pub(crate) visible: bool,
    /// Degrees, clockwise in screen space.
    pub(crate) rotation: f32,
    pub(crate) alpha: f32,
}

impl LayerProperties {
    pub fn new(name: impl Into<String>, position: Pos2) -> Self {
        Self {
            name: name.into(),
            position,
            depth: 0,
            visible: true,
            rotation: 0.0,
            alpha: 1.0,
        }
    }
}

/// Rotates `v` by `degrees` around the origin.
pub(crate) fn rotate_vec(v: Vec2, degrees: f32) -> Vec2 {
    if degrees == 0.0 {
        return v;
    }
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Clamps an opacity into `0.0..=1.0`; NaN becomes fully opaque.
pub(crate) fn clamp_alpha(alpha: f32) -> f32 {
    if alpha.is_nan() { 1.0 } else { alpha.clamp(0.0, 1.0) }
}

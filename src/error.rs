use thiserror::Error;

/// Largest width or height a raster may be constructed with.
pub const MAX_DIMENSION: u32 = 100_000;

/// Errors raised by the canvas model itself.
///
/// Best-effort operations (pixel writes outside a raster, depth changes at the
/// ends of the stack, selecting an index that does not exist) never produce
/// these; they are silently ignored instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("invalid dimensions {width}x{height}: each side must be in 1..=100000")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("pixel ({x}, {y}) is outside of the {width}x{height} raster")]
    PixelOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("layer index {index} is out of range for {len} layers")]
    LayerIndexOutOfRange { index: usize, len: usize },

    #[error("there is no active layer")]
    NoActiveLayer,

    #[error("listener is already registered")]
    DuplicateListener,
}

/// Validates raster dimensions against `1..=MAX_DIMENSION`.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), CanvasError> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        Err(CanvasError::InvalidDimensions { width, height })
    } else {
        Ok(())
    }
}

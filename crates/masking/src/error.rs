use thiserror::Error;

/// Errors from mask surface operations
#[derive(Debug, Error)]
pub enum MaskError {
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} mask")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
}

//! Decoded base image that the mask is painted over

use image::RgbaImage;
use thiserror::Error;

use crate::geometry::fit_rect;

#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("Failed to decode image: {0}")]
    Decode(String),
}

/// The photograph being masked, decoded to RGBA8
///
/// Read-only once loaded. The mask engine only consults it for letterboxing
/// geometry and for gating paint input; it never mutates the pixels.
pub struct BaseImage {
    image: RgbaImage,
}

impl BaseImage {
    /// Decode an image from raw encoded bytes (PNG, JPEG, ...)
    pub fn decode(bytes: &[u8]) -> Result<Self, ImageLoadError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| ImageLoadError::Decode(e.to_string()))?
            .to_rgba8();
        Ok(Self { image })
    }

    /// Wrap an already-decoded RGBA image
    pub fn from_rgba(image: RgbaImage) -> Self {
        Self { image }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The decoded pixels
    pub fn rgba(&self) -> &RgbaImage {
        &self.image
    }

    /// The letterboxed rectangle this image occupies on a canvas of the given size
    pub fn fit_into(&self, canvas_width: u32, canvas_height: u32) -> (f32, f32, f32, f32) {
        fit_rect(
            self.width() as f32,
            self.height() as f32,
            canvas_width as f32,
            canvas_height as f32,
        )
    }
}

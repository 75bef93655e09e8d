//! PNG export of the working mask

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use thiserror::Error;
use tracing::debug;

use crate::surface::MaskSurface;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to encode PNG: {0}")]
    Encode(String),
    #[error("Surface dimensions do not form a valid image")]
    InvalidDimensions,
}

/// Encode the mask exactly as stored: white strokes over transparency
pub fn encode_png(surface: &MaskSurface) -> Result<Vec<u8>, ExportError> {
    let image = surface_to_image(surface)?;
    encode(&image)
}

/// Encode the mask flattened onto an opaque black background
///
/// This is the submission form for consumers that require a fully opaque
/// alpha channel: masked regions appear as white scaled by their alpha,
/// everything else as solid black.
pub fn encode_flattened_png(surface: &MaskSurface) -> Result<Vec<u8>, ExportError> {
    let image = flatten_onto_black(surface)?;
    encode(&image)
}

/// Composite the mask over an opaque black background
pub fn flatten_onto_black(surface: &MaskSurface) -> Result<RgbaImage, ExportError> {
    let mut image = surface_to_image(surface)?;
    for pixel in image.pixels_mut() {
        let alpha = pixel.0[3] as f32 / 255.0;
        pixel.0[0] = (pixel.0[0] as f32 * alpha).round() as u8;
        pixel.0[1] = (pixel.0[1] as f32 * alpha).round() as u8;
        pixel.0[2] = (pixel.0[2] as f32 * alpha).round() as u8;
        pixel.0[3] = 255;
    }
    Ok(image)
}

fn surface_to_image(surface: &MaskSurface) -> Result<RgbaImage, ExportError> {
    RgbaImage::from_raw(surface.width, surface.height, surface.as_bytes().to_vec())
        .ok_or(ExportError::InvalidDimensions)
}

fn encode(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    debug!(
        "encoded {}x{} mask into {} byte PNG",
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaintStyle;

    #[test]
    fn test_encode_preserves_alpha() {
        let mut surface = MaskSurface::new(16, 16);
        surface.paint_disc(8.0, 8.0, 4.0, PaintStyle::brush(0.5));

        let png = encode_png(&surface).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();

        assert_eq!(decoded.dimensions(), (16, 16));
        assert_eq!(decoded.get_pixel(8, 8).0, [255, 255, 255, 128]);
        assert_eq!(decoded.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_flatten_onto_black() {
        let mut surface = MaskSurface::new(8, 8);
        surface.set_pixel(2, 2, [255, 255, 255, 128]).unwrap();
        surface.set_pixel(3, 3, [255, 255, 255, 255]).unwrap();

        let flat = flatten_onto_black(&surface).unwrap();

        assert_eq!(flat.get_pixel(2, 2).0, [128, 128, 128, 255]);
        assert_eq!(flat.get_pixel(3, 3).0, [255, 255, 255, 255]);
        assert_eq!(flat.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_flattened_png_is_fully_opaque() {
        let mut surface = MaskSurface::new(16, 16);
        surface.paint_disc(8.0, 8.0, 5.0, PaintStyle::brush(0.5));

        let png = encode_flattened_png(&surface).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();

        assert!(decoded.pixels().all(|p| p.0[3] == 255));
    }
}

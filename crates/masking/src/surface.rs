//! CPU raster buffer for the mask - 8-bit RGBA storage

use crate::constants::CLEAR_PIXEL;
use crate::error::MaskError;

/// An 8-bit RGBA raster holding the editable mask
///
/// Pixels are stored row-major as straight (non-premultiplied) [r, g, b, a].
/// A cleared mask is fully transparent; painted regions carry white with the
/// alpha that marks them for inpainting.
pub struct MaskSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    /// Pixel data in row-major order, each pixel is [r, g, b, a] as u8
    pixels: Vec<[u8; 4]>,
}

impl MaskSurface {
    /// Create a new surface with the given dimensions, initialized to fully transparent
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![CLEAR_PIXEL; pixel_count],
        }
    }

    /// Reset every pixel to fully transparent
    pub fn clear(&mut self) {
        self.pixels.fill(CLEAR_PIXEL);
    }

    /// Resize the surface, discarding all prior content
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![CLEAR_PIXEL; (width as usize) * (height as usize)];
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Result<usize, MaskError> {
        if x >= self.width || y >= self.height {
            return Err(MaskError::OutOfBounds {
                x: x as i64,
                y: y as i64,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get a pixel at the given coordinates
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<[u8; 4], MaskError> {
        Ok(self.pixels[self.index(x, y)?])
    }

    /// Overwrite a pixel at the given coordinates (no blending)
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [u8; 4]) -> Result<(), MaskError> {
        let index = self.index(x, y)?;
        self.pixels[index] = pixel;
        Ok(())
    }

    /// Composite source-over coverage onto a pixel
    ///
    /// `src_alpha` is the effective source alpha (coverage times opacity) in
    /// 0..1. Storage is straight alpha, so the color channels are re-divided
    /// by the blended alpha; white painted over white stays at full value.
    /// Callers must stay within bounds.
    #[inline]
    pub(crate) fn blend_pixel(&mut self, x: u32, y: u32, color: [u8; 3], src_alpha: f32) {
        debug_assert!(x < self.width && y < self.height);
        let index = (y as usize) * (self.width as usize) + (x as usize);
        let dst = self.pixels[index];

        let dst_alpha = dst[3] as f32 / 255.0;
        let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
        if out_alpha <= 0.0 {
            self.pixels[index] = CLEAR_PIXEL;
            return;
        }

        let dst_weight = dst_alpha * (1.0 - src_alpha);
        let blend = |src: u8, dst: u8| -> u8 {
            ((src as f32 * src_alpha + dst as f32 * dst_weight) / out_alpha).round() as u8
        };

        self.pixels[index] = [
            blend(color[0], dst[0]),
            blend(color[1], dst[1]),
            blend(color[2], dst[2]),
            (out_alpha * 255.0).round() as u8,
        ];
    }

    /// Composite destination-out coverage onto a pixel
    ///
    /// Reduces stored alpha by `erase_amount` (0..1). Color channels are kept
    /// until alpha reaches zero, at which point the pixel returns to the
    /// cleared state. Callers must stay within bounds.
    #[inline]
    pub(crate) fn erase_pixel(&mut self, x: u32, y: u32, erase_amount: f32) {
        debug_assert!(x < self.width && y < self.height);
        let index = (y as usize) * (self.width as usize) + (x as usize);
        let dst = self.pixels[index];

        let remaining = (1.0 - erase_amount).max(0.0);
        let alpha = (dst[3] as f32 * remaining).round() as u8;
        self.pixels[index] = if alpha == 0 {
            CLEAR_PIXEL
        } else {
            [dst[0], dst[1], dst[2], alpha]
        };
    }

    /// Get raw pixel data as bytes, suitable for encoding or texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Get mutable access to pixel data
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        &mut self.pixels
    }
}

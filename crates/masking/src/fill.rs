//! Contiguous-region flood fill for the mask surface

use tracing::debug;

use crate::error::MaskError;
use crate::surface::MaskSurface;

/// The 8-bit alpha written by an additive fill at the given mask opacity
///
/// Quantized the same way a full-coverage brush pass stores it, so a fill
/// and a brush stroke at the same opacity produce byte-identical pixels.
pub fn fill_alpha_for_opacity(opacity: f32) -> u8 {
    (255.0 * opacity.clamp(0.0, 1.0)).round() as u8
}

/// Flood-fill the 4-connected region around a seed point
///
/// Every pixel whose RGBA tuple exactly equals the seed pixel's tuple is
/// replaced with (`color`, `alpha`). Exact equality, not color distance,
/// bounds the region: anti-aliased stroke edges do not match the interior
/// tuple and therefore act as a boundary. The fill is iterative with an
/// explicit stack, so large regions cannot overflow the call stack.
///
/// Returns the bounding box of the filled region as (x, y, width, height),
/// or `None` when the seed already holds the fill tuple and the surface is
/// left untouched. An out-of-bounds seed is an error.
pub fn flood_fill(
    surface: &mut MaskSurface,
    seed_x: i32,
    seed_y: i32,
    color: [u8; 3],
    alpha: u8,
) -> Result<Option<(u32, u32, u32, u32)>, MaskError> {
    let width = surface.width as i32;
    let height = surface.height as i32;
    if seed_x < 0 || seed_y < 0 || seed_x >= width || seed_y >= height {
        return Err(MaskError::OutOfBounds {
            x: seed_x as i64,
            y: seed_y as i64,
            width: surface.width,
            height: surface.height,
        });
    }

    let fill = [color[0], color[1], color[2], alpha];
    let target = surface.get_pixel(seed_x as u32, seed_y as u32)?;
    if target == fill {
        debug!("flood_fill: seed already holds the fill tuple, nothing to do");
        return Ok(None);
    }

    let row = width as usize;
    let pixels = surface.pixels_mut();

    let mut min_x = seed_x;
    let mut max_x = seed_x;
    let mut min_y = seed_y;
    let mut max_y = seed_y;
    let mut filled = 0usize;

    // Neighbors are pushed unconditionally; a pixel that was already filled
    // no longer matches the target tuple and is discarded on pop
    let mut stack = vec![(seed_x, seed_y)];
    while let Some((x, y)) = stack.pop() {
        if x < 0 || y < 0 || x >= width || y >= height {
            continue;
        }
        let index = (y as usize) * row + (x as usize);
        if pixels[index] != target {
            continue;
        }

        pixels[index] = fill;
        filled += 1;
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);

        stack.push((x + 1, y));
        stack.push((x - 1, y));
        stack.push((x, y + 1));
        stack.push((x, y - 1));
    }

    let bounds = (
        min_x as u32,
        min_y as u32,
        (max_x - min_x + 1) as u32,
        (max_y - min_y + 1) as u32,
    );
    debug!(
        "flood_fill: {} pixels in region ({}, {}) {}x{}",
        filled, bounds.0, bounds.1, bounds.2, bounds.3
    );
    Ok(Some(bounds))
}

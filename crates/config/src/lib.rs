//! Shared configuration for Frisket
//!
//! This crate provides the single source of truth for canvas dimensions,
//! tool defaults, and storage locations shared between the masking engine
//! and the inpainting backends.

use serde::{Deserialize, Serialize};

/// Default drawing surface width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1280;

/// Default drawing surface height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 720;

/// Default brush diameter in pixels
pub const DEFAULT_BRUSH_SIZE: f32 = 10.0;

/// Smallest selectable brush diameter
pub const MIN_BRUSH_SIZE: f32 = 1.0;

/// Largest selectable brush diameter
pub const MAX_BRUSH_SIZE: f32 = 100.0;

/// Default mask paint opacity (0.0-1.0), applied to every additive op
pub const DEFAULT_MASK_OPACITY: f32 = 0.5;

/// Default directory for persisted originals and masks
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Tool configuration for a drawing session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Brush diameter in pixels
    pub brush_size: f32,
    /// Opacity coefficient for additive paint (brush and fill)
    pub mask_opacity: f32,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            brush_size: DEFAULT_BRUSH_SIZE,
            mask_opacity: DEFAULT_MASK_OPACITY,
        }
    }
}

impl ToolConfig {
    /// Create a new tool config; out-of-range values are clamped
    pub fn new(brush_size: f32, mask_opacity: f32) -> Self {
        Self {
            brush_size: clamp_brush_size(brush_size),
            mask_opacity: mask_opacity.clamp(0.0, 1.0),
        }
    }
}

/// Clamp a brush diameter to the selectable range
pub fn clamp_brush_size(size: f32) -> f32 {
    size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ToolConfig::default();
        assert_eq!(config.brush_size, DEFAULT_BRUSH_SIZE);
        assert_eq!(config.mask_opacity, DEFAULT_MASK_OPACITY);
    }

    #[test]
    fn test_new_clamps_out_of_range_values() {
        let config = ToolConfig::new(500.0, 1.5);
        assert_eq!(config.brush_size, MAX_BRUSH_SIZE);
        assert_eq!(config.mask_opacity, 1.0);

        let config = ToolConfig::new(0.0, -0.5);
        assert_eq!(config.brush_size, MIN_BRUSH_SIZE);
        assert_eq!(config.mask_opacity, 0.0);
    }

    #[test]
    fn test_clamp_brush_size() {
        assert_eq!(clamp_brush_size(10.0), 10.0);
        assert_eq!(clamp_brush_size(0.25), MIN_BRUSH_SIZE);
        assert_eq!(clamp_brush_size(1000.0), MAX_BRUSH_SIZE);
    }
}

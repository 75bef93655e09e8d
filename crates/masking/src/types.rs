use serde::{Deserialize, Serialize};

use crate::constants::MASK_COLOR;

/// Interactive tools for mask editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum Tool {
    #[default]
    Brush = 0,
    Eraser = 1,
    Fill = 2,
}

/// Compositing rules for paint operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum CompositeMode {
    /// New coverage is alpha-blended on top of existing paint
    #[default]
    SourceOver = 0,
    /// New coverage removes existing paint
    DestinationOut = 1,
}

/// How a single paint operation writes into the mask
#[derive(Debug, Clone, Copy)]
pub struct PaintStyle {
    /// Paint color (ignored when erasing)
    pub color: [u8; 3],
    /// Overall opacity (0.0 to 1.0)
    pub opacity: f32,
    /// Compositing rule
    pub mode: CompositeMode,
}

impl PaintStyle {
    /// Mask brush style: white at the given opacity, layered over existing paint
    pub fn brush(opacity: f32) -> Self {
        Self {
            color: MASK_COLOR,
            opacity: opacity.clamp(0.0, 1.0),
            mode: CompositeMode::SourceOver,
        }
    }

    /// Eraser style: full-strength alpha removal, independent of the mask opacity setting
    pub fn eraser() -> Self {
        Self {
            color: MASK_COLOR,
            opacity: 1.0,
            mode: CompositeMode::DestinationOut,
        }
    }
}

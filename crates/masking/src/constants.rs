/// Paint color for masked regions (white). Opacity is applied separately.
pub const MASK_COLOR: [u8; 3] = [255, 255, 255];

/// Floor for stylus pressure so a zero-pressure move still leaves a mark.
pub const MIN_PRESSURE: f32 = 0.1;

/// Fully transparent pixel, the cleared state of the mask.
pub const CLEAR_PIXEL: [u8; 4] = [0, 0, 0, 0];

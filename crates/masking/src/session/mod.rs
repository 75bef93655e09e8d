//! Interactive mask editing session
//!
//! This module ties the engine together for a UI layer:
//! 1. Input comes in via `pointer_down`, `pointer_move`, `pointer_up`
//! 2. The active tool turns input into disc, capsule, or fill operations
//! 3. Operations composite in place into the RGBA mask surface
//! 4. The finished mask exports as PNG for submission or download
//!
//! The session owns all drawing state (tool, brush size, stroke progress)
//! so the engine stays testable without any UI attached.

mod pointer;

use glam::Vec2;

use frisket_config::ToolConfig;

use crate::base_image::BaseImage;
use crate::export::{self, ExportError};
use crate::surface::MaskSurface;
use crate::types::Tool;

/// A mask editing session over one canvas
pub struct MaskSession {
    /// The editable mask raster
    pub(crate) surface: MaskSurface,
    /// Decoded photograph the mask overlays (None until one is loaded)
    pub(crate) base_image: Option<BaseImage>,
    /// Currently selected tool
    pub(crate) tool: Tool,
    /// Brush size and mask opacity settings
    pub(crate) config: ToolConfig,
    /// Last pointer position of the stroke in progress (None when idle)
    pub(crate) last_point: Option<Vec2>,
}

impl MaskSession {
    /// Create a session with a blank mask of the given dimensions
    pub fn new(width: u32, height: u32, config: ToolConfig) -> Self {
        Self {
            surface: MaskSurface::new(width, height),
            base_image: None,
            tool: Tool::default(),
            config,
            last_point: None,
        }
    }

    /// Create a session at the default canvas size with default tool settings
    pub fn with_defaults() -> Self {
        Self::new(
            frisket_config::DEFAULT_CANVAS_WIDTH,
            frisket_config::DEFAULT_CANVAS_HEIGHT,
            ToolConfig::default(),
        )
    }

    /// Get the canvas width
    pub fn width(&self) -> u32 {
        self.surface.width
    }

    /// Get the canvas height
    pub fn height(&self) -> u32 {
        self.surface.height
    }

    /// Get the mask surface
    pub fn surface(&self) -> &MaskSurface {
        &self.surface
    }

    /// Get mutable access to the mask surface
    pub fn surface_mut(&mut self) -> &mut MaskSurface {
        &mut self.surface
    }

    /// Get the active tool
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Select a tool
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Get the brush diameter in pixels
    pub fn brush_size(&self) -> f32 {
        self.config.brush_size
    }

    /// Set the brush diameter, clamped to the supported range
    pub fn set_brush_size(&mut self, size: f32) {
        self.config.brush_size = frisket_config::clamp_brush_size(size);
    }

    /// Get the mask opacity coefficient
    pub fn mask_opacity(&self) -> f32 {
        self.config.mask_opacity
    }

    /// Set the mask opacity coefficient, clamped to 0..1
    pub fn set_mask_opacity(&mut self, opacity: f32) {
        self.config.mask_opacity = opacity.clamp(0.0, 1.0);
    }

    /// Whether a base image has been loaded
    pub fn has_base_image(&self) -> bool {
        self.base_image.is_some()
    }

    /// Get the loaded base image, if any
    pub fn base_image(&self) -> Option<&BaseImage> {
        self.base_image.as_ref()
    }

    /// Install a new base image
    ///
    /// The mask is cleared and any stroke in progress is dropped; the canvas
    /// keeps its dimensions and the image is letterboxed into it.
    pub fn set_base_image(&mut self, image: BaseImage) {
        self.base_image = Some(image);
        self.last_point = None;
        self.clear_mask();
    }

    /// The letterboxed rectangle the base image occupies on this canvas
    pub fn base_image_rect(&self) -> Option<(f32, f32, f32, f32)> {
        self.base_image
            .as_ref()
            .map(|image| image.fit_into(self.surface.width, self.surface.height))
    }

    /// Whether a stroke is currently in progress
    pub fn is_drawing(&self) -> bool {
        self.last_point.is_some()
    }

    /// Reset the mask to fully transparent
    pub fn clear_mask(&mut self) {
        self.surface.clear();
    }

    /// Resize the canvas
    ///
    /// Mask content is discarded and a stroke in progress is canceled, so no
    /// further paint lands in a buffer whose dimensions changed mid-stroke.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.last_point = None;
        self.surface.resize(width, height);
    }

    /// Encode the current mask as PNG, white over transparency
    pub fn mask_png(&self) -> Result<Vec<u8>, ExportError> {
        export::encode_png(&self.surface)
    }

    /// Encode the current mask flattened onto black, the submission form
    pub fn flattened_mask_png(&self) -> Result<Vec<u8>, ExportError> {
        export::encode_flattened_png(&self.surface)
    }
}

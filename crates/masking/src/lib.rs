//! Frisket masking engine - paint a translucent inpainting mask over an image
//!
//! This crate provides the mask-editing core:
//! - [`surface`] - CPU 8-bit RGBA raster holding the mask
//! - [`MaskSurface::paint_disc`] / [`MaskSurface::paint_segment`] - anti-aliased
//!   brush and eraser compositing
//! - [`fill`] - contiguous-region flood fill
//! - [`base_image`] - the decoded photograph the mask overlays
//! - [`session`] - pointer input, tool state, and stroke handling
//! - [`export`] - PNG serialization of the working and submission masks

pub mod base_image;
pub mod constants;
pub mod error;
pub mod export;
pub mod fill;
pub mod geometry;
mod paint;
pub mod session;
pub mod surface;
pub mod types;

pub use base_image::*;
pub use constants::*;
pub use error::*;
pub use export::*;
pub use fill::*;
pub use geometry::*;
pub use session::*;
pub use surface::*;
pub use types::*;

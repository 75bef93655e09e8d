//! Inpainting submission pipeline for Frisket
//!
//! The generative backend itself is out of scope; [`LocalInpaint`] mocks it
//! by persisting each submission and answering with reference paths, the
//! same contract a live service would honor.

mod local;
mod request;
mod store;

pub use local::LocalInpaint;
pub use request::{DEFAULT_PROMPT, InpaintOutcome, InpaintRequest};
pub use store::{ImageKind, ImageStore, LocalImageStore, StoreError, StoredImage};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InpaintError {
    #[error("Missing image data")]
    MissingImage,

    #[error("Storage failed: {0}")]
    Storage(#[from] StoreError),
}

/// Trait for inpainting backends
#[allow(async_fn_in_trait)]
pub trait InpaintBackend {
    /// Submit an image and mask pair, returning where the results live
    async fn submit(&mut self, request: InpaintRequest) -> Result<InpaintOutcome, InpaintError>;
}

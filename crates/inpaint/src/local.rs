//! Mock inpainting backend backed by local storage

use tracing::info;

use crate::request::{InpaintOutcome, InpaintRequest};
use crate::store::{ImageKind, ImageStore, LocalImageStore};
use crate::{InpaintBackend, InpaintError};

/// Inpainting backend that persists each submission and echoes it back
///
/// Stands in for a generative service: the original and mask are stored the
/// way a live backend would receive them, and the outcome carries reference
/// paths to the stored copies.
pub struct LocalInpaint {
    store: LocalImageStore,
}

impl LocalInpaint {
    pub fn new(store: LocalImageStore) -> Self {
        Self { store }
    }

    /// Backend writing into the default upload directory
    pub fn at_default_dir() -> Self {
        Self::new(LocalImageStore::at_default_dir())
    }

    /// The store receiving submissions
    pub fn store(&self) -> &LocalImageStore {
        &self.store
    }
}

impl InpaintBackend for LocalInpaint {
    async fn submit(&mut self, request: InpaintRequest) -> Result<InpaintOutcome, InpaintError> {
        if request.original_image.is_empty() || request.mask_image.is_empty() {
            return Err(InpaintError::MissingImage);
        }

        let original = self
            .store
            .save_png(ImageKind::Original, &request.original_image)?;
        let mask = self.store.save_png(ImageKind::Mask, &request.mask_image)?;

        let prompt = request.prompt_or_default().to_string();
        info!(
            "accepted inpaint submission: original={}, mask={}, prompt={:?}",
            original.reference, mask.reference, prompt
        );

        Ok(InpaintOutcome {
            original,
            mask,
            prompt,
            negative_prompt: request.negative_prompt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn backend_in(dir: &tempfile::TempDir) -> LocalInpaint {
        LocalInpaint::new(LocalImageStore::new(dir.path().join("uploads")))
    }

    #[tokio::test]
    async fn test_submit_persists_both_images() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = backend_in(&dir);

        let request = InpaintRequest::new(b"orig".to_vec(), b"mask".to_vec(), "sky", "");
        let outcome = backend.submit(request).await.unwrap();

        assert_eq!(fs::read(&outcome.original.path).unwrap(), b"orig");
        assert_eq!(fs::read(&outcome.mask.path).unwrap(), b"mask");
        assert!(outcome.original.reference.starts_with("/uploads/original-"));
        assert!(outcome.mask.reference.starts_with("/uploads/mask-"));
        assert_eq!(outcome.prompt, "sky");
    }

    #[tokio::test]
    async fn test_submit_rejects_missing_images() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = backend_in(&dir);

        let no_original = InpaintRequest::new(Vec::new(), b"mask".to_vec(), "", "");
        assert!(matches!(
            backend.submit(no_original).await,
            Err(InpaintError::MissingImage)
        ));

        let no_mask = InpaintRequest::new(b"orig".to_vec(), Vec::new(), "", "");
        assert!(matches!(
            backend.submit(no_mask).await,
            Err(InpaintError::MissingImage)
        ));

        // Nothing was stored for the rejected submissions
        assert!(backend.store().list_originals().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_defaults_empty_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = backend_in(&dir);

        let request = InpaintRequest::new(b"o".to_vec(), b"m".to_vec(), "", "low quality");
        let outcome = backend.submit(request).await.unwrap();

        assert_eq!(outcome.prompt, crate::DEFAULT_PROMPT);
        assert_eq!(outcome.negative_prompt, "low quality");
    }
}

//! Filesystem persistence for submitted images

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from image storage operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// What a stored image represents, which selects its filename prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageKind {
    /// The photograph submitted for inpainting
    Original,
    /// The painted mask submitted alongside it
    Mask,
    /// A standalone canvas snapshot saved by the user
    Snapshot,
}

impl ImageKind {
    /// Filename prefix for this kind
    pub fn prefix(self) -> &'static str {
        match self {
            ImageKind::Original => "original",
            ImageKind::Mask => "mask",
            ImageKind::Snapshot => "img",
        }
    }
}

/// A stored image on disk plus the public path clients use to reference it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredImage {
    /// Bare filename, e.g. `original-1700000000000.png`
    pub filename: String,
    /// Location on disk
    pub path: PathBuf,
    /// Public reference path, e.g. `/uploads/original-1700000000000.png`
    pub reference: String,
    /// Modification time in milliseconds since the UNIX epoch
    pub modified_ms: u64,
}

/// Backing storage for submitted images
pub trait ImageStore {
    /// Persist encoded PNG bytes, returning where they landed
    fn save_png(&self, kind: ImageKind, bytes: &[u8]) -> Result<StoredImage, StoreError>;

    /// List stored originals, newest first
    fn list_originals(&self) -> Result<Vec<StoredImage>, StoreError>;
}

/// Image store writing into a local directory
///
/// The directory is created on demand. Filenames carry a millisecond
/// timestamp so listings track submission order.
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store at the default upload directory
    pub fn at_default_dir() -> Self {
        Self::new(frisket_config::DEFAULT_UPLOAD_DIR)
    }

    /// The directory this store writes into
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn public_reference(&self, filename: &str) -> String {
        let dir = self
            .root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "uploads".to_string());
        format!("/{dir}/{filename}")
    }
}

impl ImageStore for LocalImageStore {
    fn save_png(&self, kind: ImageKind, bytes: &[u8]) -> Result<StoredImage, StoreError> {
        fs::create_dir_all(&self.root)?;

        let now = unix_millis();
        let filename = format!("{}-{}.png", kind.prefix(), now);
        let path = self.root.join(&filename);
        fs::write(&path, bytes)?;
        debug!(
            "saved {} byte {} image to {}",
            bytes.len(),
            kind.prefix(),
            path.display()
        );

        Ok(StoredImage {
            reference: self.public_reference(&filename),
            filename,
            path,
            modified_ms: now,
        })
    }

    fn list_originals(&self) -> Result<Vec<StoredImage>, StoreError> {
        fs::create_dir_all(&self.root)?;

        let mut images = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let filename = entry.file_name().to_string_lossy().into_owned();
            if !filename.starts_with("original-") {
                continue;
            }
            let modified_ms = entry
                .metadata()?
                .modified()
                .ok()
                .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
                .map(|duration| duration.as_millis() as u64)
                .unwrap_or(0);
            images.push(StoredImage {
                reference: self.public_reference(&filename),
                path: entry.path(),
                filename,
                modified_ms,
            });
        }

        images.sort_by(|a, b| b.modified_ms.cmp(&a.modified_ms));
        Ok(images)
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_save_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().join("uploads"));

        let stored = store.save_png(ImageKind::Original, b"fake png bytes").unwrap();

        assert!(stored.filename.starts_with("original-"));
        assert!(stored.filename.ends_with(".png"));
        assert!(stored.reference.starts_with("/uploads/original-"));
        assert_eq!(fs::read(&stored.path).unwrap(), b"fake png bytes");
    }

    #[test]
    fn test_kind_prefixes() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().join("uploads"));

        let mask = store.save_png(ImageKind::Mask, b"m").unwrap();
        let snapshot = store.save_png(ImageKind::Snapshot, b"s").unwrap();

        assert!(mask.filename.starts_with("mask-"));
        assert!(snapshot.filename.starts_with("img-"));
    }

    #[test]
    fn test_list_originals_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().join("uploads"));

        let first = store.save_png(ImageKind::Original, b"one").unwrap();
        sleep(Duration::from_millis(10));
        let second = store.save_png(ImageKind::Original, b"two").unwrap();
        sleep(Duration::from_millis(10));
        store.save_png(ImageKind::Mask, b"not listed").unwrap();
        store.save_png(ImageKind::Snapshot, b"not listed").unwrap();

        let listed = store.list_originals().unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].filename, second.filename);
        assert_eq!(listed[1].filename, first.filename);
        assert!(listed[0].modified_ms >= listed[1].modified_ms);
    }

    #[test]
    fn test_list_on_fresh_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().join("uploads"));

        assert!(store.list_originals().unwrap().is_empty());
        assert!(store.root().is_dir());
    }
}

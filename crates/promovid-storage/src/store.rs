//! Asset store rooted at the static file directory.

use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::error::{StorageError, StorageResult};

/// Subdirectory for user uploads.
pub const UPLOADS_SUBDIR: &str = "uploads";
/// Subdirectory for images mirrored from scraped product pages.
pub const SCRAPED_SUBDIR: &str = "scraped";
/// Subdirectory for finished videos.
pub const GENERATED_SUBDIR: &str = "generated";

/// Allowed image extensions for uploads, lowercase, without the dot.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Filesystem store for all assets served under the static route.
///
/// Relative paths returned by this store are exactly the paths the static
/// route serves, e.g. `uploads/3f2a....png`.
#[derive(Debug, Clone)]
pub struct AssetStore {
    static_root: PathBuf,
}

impl AssetStore {
    /// Open a store, creating the static root and its subdirectories.
    pub async fn new(static_root: impl Into<PathBuf>) -> StorageResult<Self> {
        let static_root = static_root.into();
        for subdir in [UPLOADS_SUBDIR, SCRAPED_SUBDIR, GENERATED_SUBDIR] {
            tokio::fs::create_dir_all(static_root.join(subdir)).await?;
        }
        Ok(Self { static_root })
    }

    pub fn static_root(&self) -> &Path {
        &self.static_root
    }

    /// Save an uploaded image under a fresh UUID name.
    ///
    /// The extension comes from the client-supplied filename and must be
    /// on the image whitelist. Returns the static-relative path.
    pub async fn save_upload(&self, original_filename: &str, bytes: &[u8]) -> StorageResult<String> {
        let ext = extension_of(original_filename)
            .ok_or_else(|| StorageError::InvalidExtension(original_filename.to_string()))?;
        if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            return Err(StorageError::InvalidExtension(original_filename.to_string()));
        }
        self.write_new(UPLOADS_SUBDIR, &ext, bytes).await
    }

    /// Save an image fetched from a scraped product page.
    ///
    /// The extension is taken from the Content-Type when recognizable,
    /// else from the source URL path, else `jpg`.
    pub async fn save_scraped(
        &self,
        source_url: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> StorageResult<String> {
        let ext = content_type
            .and_then(extension_for_content_type)
            .map(|s| s.to_string())
            .or_else(|| {
                extension_of(source_url).filter(|e| IMAGE_EXTENSIONS.contains(&e.as_str()))
            })
            .unwrap_or_else(|| "jpg".to_string());
        self.write_new(SCRAPED_SUBDIR, &ext, bytes).await
    }

    /// Create a fresh generated-video file for streaming writes.
    ///
    /// Returns the static-relative path and the open file handle; the
    /// caller streams the download into it.
    pub async fn create_generated_video(&self) -> StorageResult<(String, tokio::fs::File)> {
        let relative = format!("{GENERATED_SUBDIR}/{}.mp4", Uuid::new_v4());
        let path = self.static_root.join(&relative);
        let file = tokio::fs::File::create(&path).await?;
        debug!("Created {}", relative);
        Ok((relative, file))
    }

    /// Resolve a static-relative path to an absolute one, rejecting
    /// traversal outside the static root.
    pub fn resolve(&self, relative: &str) -> StorageResult<PathBuf> {
        if relative.starts_with('/') || relative.split('/').any(|part| part == "..") {
            return Err(StorageError::InvalidPath(relative.to_string()));
        }
        Ok(self.static_root.join(relative))
    }

    async fn write_new(&self, subdir: &str, ext: &str, bytes: &[u8]) -> StorageResult<String> {
        let relative = format!("{subdir}/{}.{ext}", Uuid::new_v4());
        let path = self.static_root.join(&relative);
        tokio::fs::write(&path, bytes).await?;
        debug!("Saved {} bytes to {}", bytes.len(), relative);
        Ok(relative)
    }
}

/// Lowercase extension of a filename or URL path, without the dot.
fn extension_of(name: &str) -> Option<String> {
    // Strip any query string before looking at the extension
    let name = name.split(['?', '#']).next().unwrap_or(name);
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(ext.to_lowercase())
}

fn extension_for_content_type(content_type: &str) -> Option<&'static str> {
    match content_type.split(';').next().map(str::trim) {
        Some("image/png") => Some("png"),
        Some("image/jpeg") => Some("jpg"),
        Some("image/webp") => Some("webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_new_creates_subdirectories() {
        let dir = tempdir().unwrap();
        let store = AssetStore::new(dir.path()).await.unwrap();
        for subdir in [UPLOADS_SUBDIR, SCRAPED_SUBDIR, GENERATED_SUBDIR] {
            assert!(store.static_root().join(subdir).is_dir());
        }
    }

    #[tokio::test]
    async fn test_save_upload_uses_uuid_name() {
        let dir = tempdir().unwrap();
        let store = AssetStore::new(dir.path()).await.unwrap();

        let rel = store.save_upload("photo.PNG", b"fake png").await.unwrap();
        assert!(rel.starts_with("uploads/"));
        assert!(rel.ends_with(".png"));
        assert!(!rel.contains("photo"));
        assert_eq!(
            tokio::fs::read(store.resolve(&rel).unwrap()).await.unwrap(),
            b"fake png"
        );
    }

    #[tokio::test]
    async fn test_save_upload_rejects_bad_extension() {
        let dir = tempdir().unwrap();
        let store = AssetStore::new(dir.path()).await.unwrap();

        for name in ["script.exe", "archive.tar.gz", "noext"] {
            let err = store.save_upload(name, b"data").await.unwrap_err();
            assert!(matches!(err, StorageError::InvalidExtension(_)), "{name}");
        }
    }

    #[tokio::test]
    async fn test_save_scraped_extension_sources() {
        let dir = tempdir().unwrap();
        let store = AssetStore::new(dir.path()).await.unwrap();

        let rel = store
            .save_scraped("https://cdn.example.com/a", Some("image/webp"), b"x")
            .await
            .unwrap();
        assert!(rel.ends_with(".webp"));

        let rel = store
            .save_scraped("https://cdn.example.com/b.png?size=large", None, b"x")
            .await
            .unwrap();
        assert!(rel.ends_with(".png"));

        let rel = store
            .save_scraped("https://cdn.example.com/c", None, b"x")
            .await
            .unwrap();
        assert!(rel.ends_with(".jpg"));
    }

    #[tokio::test]
    async fn test_resolve_rejects_traversal() {
        let dir = tempdir().unwrap();
        let store = AssetStore::new(dir.path()).await.unwrap();

        assert!(store.resolve("uploads/../../etc/passwd").is_err());
        assert!(store.resolve("/etc/passwd").is_err());
        assert!(store.resolve("uploads/ok.png").is_ok());
    }

    #[tokio::test]
    async fn test_create_generated_video_is_writable_and_resolvable() {
        use tokio::io::AsyncWriteExt;

        let dir = tempdir().unwrap();
        let store = AssetStore::new(dir.path()).await.unwrap();

        let (rel, mut file) = store.create_generated_video().await.unwrap();
        file.write_all(b"mp4 bytes").await.unwrap();
        file.flush().await.unwrap();

        assert!(rel.starts_with("generated/"));
        assert!(rel.ends_with(".mp4"));
        assert_eq!(
            tokio::fs::read(store.resolve(&rel).unwrap()).await.unwrap(),
            b"mp4 bytes"
        );
    }
}

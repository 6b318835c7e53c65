//! Optional on-disk archival of uploads and generated artifacts.

use chartpdf_common::{sanitize_filename, Result};
use chartpdf_config::StorageConfig;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

/// Name used when an upload's file name sanitizes to nothing.
const FALLBACK_UPLOAD_NAME: &str = "upload";

/// Writes uploads and outputs into the configured directories.
#[derive(Debug, Clone, Default)]
pub struct ArtifactStore {
    upload_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl ArtifactStore {
    /// Creates the configured directories.
    pub async fn prepare(config: &StorageConfig) -> Result<Self> {
        for dir in [&config.upload_dir, &config.output_dir].into_iter().flatten() {
            fs::create_dir_all(dir).await?;
            info!(path = %dir.display(), "Storage directory ready");
        }
        Ok(Self {
            upload_dir: config.upload_dir.clone(),
            output_dir: config.output_dir.clone(),
        })
    }

    /// Store that keeps nothing.
    pub const fn disabled() -> Self {
        Self {
            upload_dir: None,
            output_dir: None,
        }
    }

    /// Whether generated PNG and PDF files are kept.
    pub const fn keeps_outputs(&self) -> bool {
        self.output_dir.is_some()
    }

    /// Writes the upload as `<id>_<sanitized name>`; `None` when uploads are not kept.
    pub async fn save_upload(&self, id: Uuid, file_name: &str, bytes: &[u8]) -> Result<Option<PathBuf>> {
        let Some(dir) = &self.upload_dir else {
            return Ok(None);
        };
        let name = sanitize_filename(file_name).unwrap_or_else(|| FALLBACK_UPLOAD_NAME.to_string());
        let path = dir.join(format!("{id}_{name}"));
        write(&path, bytes).await?;
        Ok(Some(path))
    }

    /// Writes `<id>.png` and `<id>.pdf`; returns the paths written.
    pub async fn save_outputs(&self, id: Uuid, png: Option<&[u8]>, pdf: &[u8]) -> Result<Vec<PathBuf>> {
        let Some(dir) = &self.output_dir else {
            return Ok(Vec::new());
        };

        let mut written = Vec::with_capacity(2);
        if let Some(png) = png {
            let path = dir.join(format!("{id}.png"));
            write(&path, png).await?;
            written.push(path);
        }
        let path = dir.join(format!("{id}.pdf"));
        write(&path, pdf).await?;
        written.push(path);

        Ok(written)
    }
}

async fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).await?;
    debug!(path = %path.display(), bytes = bytes.len(), "Artifact written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartpdf_common::test_utils::create_temp_dir;

    fn config(root: &Path) -> StorageConfig {
        StorageConfig {
            upload_dir: Some(root.join("uploads")),
            output_dir: Some(root.join("output")),
        }
    }

    #[tokio::test]
    async fn test_prepare_creates_directories() {
        let root = create_temp_dir();
        let store = ArtifactStore::prepare(&config(root.path())).await.unwrap();

        assert!(root.path().join("uploads").is_dir());
        assert!(root.path().join("output").is_dir());
        assert!(store.keeps_outputs());
    }

    #[tokio::test]
    async fn test_upload_name_is_sanitized() {
        let root = create_temp_dir();
        let store = ArtifactStore::prepare(&config(root.path())).await.unwrap();
        let id = Uuid::new_v4();

        let path = store
            .save_upload(id, "../../etc/passwd", b"a,b\n1,2\n")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(path.parent().unwrap(), root.path().join("uploads"));
        assert_eq!(path.file_name().unwrap().to_string_lossy(), format!("{id}_etc_passwd"));

        let fallback = store.save_upload(id, "///", b"x").await.unwrap().unwrap();
        assert!(fallback.ends_with(format!("{id}_upload")));
    }

    #[tokio::test]
    async fn test_outputs_named_by_request_id() {
        let root = create_temp_dir();
        let store = ArtifactStore::prepare(&config(root.path())).await.unwrap();
        let id = Uuid::new_v4();

        let written = store.save_outputs(id, Some(b"png".as_slice()), b"%PDF-").await.unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(std::fs::read(root.path().join("output").join(format!("{id}.pdf"))).unwrap(), b"%PDF-");
    }

    #[tokio::test]
    async fn test_disabled_store_writes_nothing() {
        let store = ArtifactStore::disabled();
        assert!(store.save_upload(Uuid::new_v4(), "a.csv", b"").await.unwrap().is_none());
        assert!(store.save_outputs(Uuid::new_v4(), None, b"").await.unwrap().is_empty());
        assert!(!store.keeps_outputs());
    }
}

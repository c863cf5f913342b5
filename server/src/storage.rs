use std::io;
use std::path::{Path, PathBuf};

use sketchpad_shared::DrawingManifest;

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("failed to read drawings dir {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },
}

/// Lists the preset images in `dir`. A directory that does not exist simply
/// has no presets.
pub async fn list_drawings(dir: &Path) -> Result<DrawingManifest, ManifestError> {
    let read_error = |source| ManifestError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            log::warn!("Drawings dir {} does not exist", dir.display());
            return Ok(DrawingManifest::default());
        }
        Err(error) => return Err(read_error(error)),
    };
    let mut file_names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
        let is_file = entry
            .file_type()
            .await
            .map(|kind| kind.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            file_names.push(name.to_string());
        }
    }
    Ok(DrawingManifest::from_file_names(file_names))
}

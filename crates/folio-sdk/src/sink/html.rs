//! Write the rendered site page.

use std::path::{Path, PathBuf};

/// Write `rendered` to `path` as UTF-8, replacing any existing file.
pub fn write_html(path: &Path, rendered: &str) -> Result<(), SinkError> {
    std::fs::write(path, rendered).map_err(|e| SinkError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(?path, bytes = rendered.len(), "Wrote HTML output");
    Ok(())
}

/// Whether the stylesheet build output directory exists. Advisory only.
pub fn asset_dir_present(dir: &Path) -> bool {
    let present = dir.is_dir();
    if !present {
        tracing::warn!(?dir, "Stylesheet output directory not found");
    }
    present
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

//! Transient storage for uploaded résumés.
//!
//! Files land under the configured upload directory with a generated UUID
//! name, so concurrent uploads with the same client filename cannot clobber
//! each other. The client filename only appears as response metadata.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;
use uuid::Uuid;

/// Writes the uploaded bytes under a fresh UUID name and returns the path.
pub async fn store_upload(upload_dir: &Path, data: &[u8]) -> Result<PathBuf> {
    let path = upload_dir.join(format!("{}.pdf", Uuid::new_v4()));
    tokio::fs::write(&path, data)
        .await
        .with_context(|| format!("failed to write upload to {}", path.display()))?;
    Ok(path)
}

/// Removes a stored upload once the request is done with it. Best-effort:
/// a leftover file is only log noise, not a correctness problem.
pub async fn discard_upload(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        warn!("failed to remove upload {}: {e}", path.display());
    }
}

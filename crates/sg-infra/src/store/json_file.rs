//! Shared read/write primitives for the JSON file repositories.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tokio::fs;

/// Read and deserialize `path`; `Ok(None)` when the file does not exist.
pub(crate) async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(e).with_context(|| format!("read failed: {}", path.display()));
        }
    };
    let value = serde_json::from_str(&content)
        .with_context(|| format!("parse failed: {}", path.display()))?;
    Ok(Some(value))
}

/// Serialize `value` and atomically write it to `path`, creating parent
/// directories as needed. The temp file is renamed over the target, so the
/// target is either the previous or the fully written new contents.
pub(crate) async fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("create data dir failed: {}", dir.display()))?;
    }

    let content = serde_json::to_string_pretty(value).context("serialize failed")?;

    // TODO: rename-over-existing can fail on Windows with a concurrent
    // reader; revisit if a Windows shell ever appears.
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, content)
        .await
        .with_context(|| format!("write temp file failed: {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).await.with_context(|| {
        format!(
            "rename temp file to target failed: {} -> {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

/// Delete `path`, tolerating it already being gone.
pub(crate) async fn remove_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("remove failed: {}", path.display())),
    }
}

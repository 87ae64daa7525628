use anyhow::{Context, Result};
use std::path::PathBuf;

/// Snapgate's data root.
///
/// - macOS: `~/Library/Application Support/snapgate`
/// - Windows: `%APPDATA%\snapgate`
/// - Linux: `$XDG_DATA_HOME/snapgate` or `~/.local/share/snapgate`
///
/// The directory is not created here; repositories create it on first
/// write.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        platform_data_dir().context("Failed to get platform-specific data directory")?;
    Ok(base_dir.join("snapgate"))
}

pub fn settings_path() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("settings.json"))
}

pub fn history_path() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("history.json"))
}

pub fn notice_path() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("pending_notice.json"))
}

pub fn undo_path() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("undo.json"))
}

fn platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            return Ok(PathBuf::from(xdg_data_home));
        }
    }
    dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to determine the user data directory"))
}

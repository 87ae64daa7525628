use serde::{Deserialize, Serialize};

use crate::archive::ArchiveService;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Presentation preference persisted for the UI layer; nothing in the
    /// core reads it.
    pub dark_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveSettings {
    /// Which provider an archive gesture consults.
    pub service: ArchiveService,

    /// Open the resolved snapshot in a new tab instead of navigating the
    /// current document.
    pub open_in_new_tab: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub general: GeneralSettings,

    #[serde(default)]
    pub archive: ArchiveSettings,
}

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

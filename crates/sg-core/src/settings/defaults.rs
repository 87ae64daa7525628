use super::model::*;
use crate::archive::ArchiveService;

impl Default for GeneralSettings {
    fn default() -> Self {
        Self { dark_mode: false }
    }
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            service: ArchiveService::ArchiveToday,
            open_in_new_tab: true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            general: GeneralSettings::default(),
            archive: ArchiveSettings::default(),
        }
    }
}

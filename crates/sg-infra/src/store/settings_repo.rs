use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use sg_core::{
    ports::SettingsPort,
    settings::model::{Settings, CURRENT_SCHEMA_VERSION},
};

use super::json_file::{read_json, write_json_pretty};
use super::settings_migration::SettingsMigrator;

/// Settings persisted as one JSON file.
///
/// Loading a file written by an older schema migrates it to the current
/// one and persists the migrated form back, so the on-disk version only
/// moves forward.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsPort for FileSettingsRepository {
    async fn load(&self) -> Result<Settings> {
        let Some(settings) = read_json::<Settings>(&self.path).await? else {
            return Ok(Settings::default());
        };

        let original_version = settings.schema_version;
        let migrated = SettingsMigrator::new().migrate_to_latest(settings);

        if original_version < CURRENT_SCHEMA_VERSION {
            self.save(&migrated).await?;
        }

        Ok(migrated)
    }

    async fn save(&self, settings: &Settings) -> Result<()> {
        write_json_pretty(&self.path, settings).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::archive::ArchiveService;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));
        let settings = repo.load().await.unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));

        let mut settings = Settings::default();
        settings.archive.service = ArchiveService::Wayback;
        settings.archive.open_in_new_tab = false;
        repo.save(&settings).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("nested").join("settings.json"));
        repo.save(&Settings::default()).await.unwrap();
        assert_eq!(repo.load().await.unwrap(), Settings::default());
    }
}

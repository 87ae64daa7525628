//! Use case for updating application settings.

use anyhow::Result;
use std::sync::Arc;

use sg_core::ports::SettingsPort;
use sg_core::settings::model::{Settings, CURRENT_SCHEMA_VERSION};
use tracing::{info, info_span, Instrument};

/// Validates and persists settings, logging which fields changed.
pub struct UpdateSettingsUseCase {
    settings: Arc<dyn SettingsPort>,
}

impl UpdateSettingsUseCase {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self, mut settings: Settings) -> Result<()> {
        let span = info_span!("usecase.update_settings.execute");

        async {
            let old = self.settings.load().await?;

            let changes = changed_fields(&old, &settings);
            if changes.is_empty() {
                info!("updating settings (no changes detected)");
            } else {
                info!(changed_fields = changes.join(","), "updating settings");
            }

            // Whatever came in, what goes out is current-schema.
            settings.schema_version = CURRENT_SCHEMA_VERSION;
            self.settings.save(&settings).await
        }
        .instrument(span)
        .await
    }
}

fn changed_fields(old: &Settings, new: &Settings) -> Vec<&'static str> {
    let mut changes = Vec::new();
    if old.archive.service != new.archive.service {
        changes.push("archive.service");
    }
    if old.archive.open_in_new_tab != new.archive.open_in_new_tab {
        changes.push("archive.open_in_new_tab");
    }
    if old.general.dark_mode != new.general.dark_mode {
        changes.push("general.dark_mode");
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sg_core::archive::ArchiveService;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemorySettings {
        stored: Mutex<Option<Settings>>,
    }

    #[async_trait]
    impl SettingsPort for InMemorySettings {
        async fn load(&self) -> anyhow::Result<Settings> {
            Ok(self.stored.lock().unwrap().clone().unwrap_or_default())
        }

        async fn save(&self, settings: &Settings) -> anyhow::Result<()> {
            *self.stored.lock().unwrap() = Some(settings.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn persists_the_new_settings() {
        let repo = Arc::new(InMemorySettings::default());
        let mut settings = Settings::default();
        settings.archive.service = ArchiveService::Wayback;

        UpdateSettingsUseCase::new(repo.clone())
            .execute(settings.clone())
            .await
            .unwrap();

        assert_eq!(repo.load().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn stamps_the_current_schema_version() {
        let repo = Arc::new(InMemorySettings::default());
        let settings = Settings {
            schema_version: 0,
            ..Settings::default()
        };

        UpdateSettingsUseCase::new(repo.clone())
            .execute(settings)
            .await
            .unwrap();

        assert_eq!(
            repo.load().await.unwrap().schema_version,
            CURRENT_SCHEMA_VERSION
        );
    }

    #[test]
    fn diff_names_the_changed_fields() {
        let old = Settings::default();
        let mut new = Settings::default();
        new.archive.service = ArchiveService::Wayback;
        new.general.dark_mode = true;

        assert_eq!(
            changed_fields(&old, &new),
            vec!["archive.service", "general.dark_mode"]
        );
        assert!(changed_fields(&old, &old).is_empty());
    }
}

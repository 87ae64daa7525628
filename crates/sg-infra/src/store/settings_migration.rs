use sg_core::ports::SettingsMigrationPort;
use sg_core::settings::model::{Settings, CURRENT_SCHEMA_VERSION};

pub struct SettingsMigrator {
    migrations: Vec<Box<dyn SettingsMigrationPort>>,
}

impl SettingsMigrator {
    pub fn new() -> Self {
        Self {
            // Future schema bumps register their step here.
            migrations: vec![],
        }
    }

    pub fn migrate_to_latest(&self, mut settings: Settings) -> Settings {
        loop {
            let current = settings.schema_version;

            if current >= CURRENT_SCHEMA_VERSION {
                break;
            }

            let migration = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
                .unwrap_or_else(|| panic!("no migration found from version {}", current));

            settings = migration.migrate(settings);
        }

        settings
    }
}

impl Default for SettingsMigrator {
    fn default() -> Self {
        Self::new()
    }
}

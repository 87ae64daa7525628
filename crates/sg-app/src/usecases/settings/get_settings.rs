use anyhow::Result;
use std::sync::Arc;

use sg_core::ports::SettingsPort;
use sg_core::settings::model::Settings;

pub struct GetSettingsUseCase {
    settings: Arc<dyn SettingsPort>,
}

impl GetSettingsUseCase {
    pub fn new(settings: Arc<dyn SettingsPort>) -> Self {
        Self { settings }
    }

    pub async fn execute(&self) -> Result<Settings> {
        self.settings.load().await
    }
}

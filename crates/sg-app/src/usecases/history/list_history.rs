use anyhow::Result;
use std::sync::Arc;

use sg_core::history::{self, HistoryEntry};
use sg_core::ports::HistoryRepositoryPort;
use tracing::info;

/// List the lookup history, newest first.
///
/// Lists written by older versions may carry duplicates; when the cleanup
/// actually drops something, the cleaned list is persisted back.
pub struct ListHistoryUseCase {
    history: Arc<dyn HistoryRepositoryPort>,
}

impl ListHistoryUseCase {
    pub fn new(history: Arc<dyn HistoryRepositoryPort>) -> Self {
        Self { history }
    }

    pub async fn execute(&self) -> Result<Vec<HistoryEntry>> {
        let entries = self.history.load().await?;
        let stored = entries.len();
        let cleaned = history::dedup(entries);

        if cleaned.len() != stored {
            info!(
                removed = stored - cleaned.len(),
                "removed duplicate history entries"
            );
            self.history.save(&cleaned).await?;
        }

        Ok(cleaned)
    }
}

use anyhow::Result;
use std::sync::Arc;

use sg_core::history::{self, HistoryEntry, UndoSnapshot, UndoStash};
use sg_core::ports::{ClockPort, HistoryRepositoryPort, UndoStashPort};
use tracing::info;

/// Delete one history entry by position, keeping an undo snapshot.
pub struct DeleteHistoryEntryUseCase {
    history: Arc<dyn HistoryRepositoryPort>,
    undo: Arc<dyn UndoStashPort>,
    clock: Arc<dyn ClockPort>,
}

impl DeleteHistoryEntryUseCase {
    pub fn new(
        history: Arc<dyn HistoryRepositoryPort>,
        undo: Arc<dyn UndoStashPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            history,
            undo,
            clock,
        }
    }

    /// Returns the removed entry, or `None` for an out-of-range index.
    pub async fn execute(&self, index: usize) -> Result<Option<HistoryEntry>> {
        let entries = self.history.load().await?;
        let Some((remaining, removed)) = history::remove_at(entries, index) else {
            return Ok(None);
        };

        self.history.save(&remaining).await?;
        self.undo
            .stash(&UndoStash::new(
                UndoSnapshot::Entry {
                    entry: removed.clone(),
                    index,
                },
                self.clock.now_ms(),
            ))
            .await?;

        info!(url = %removed.url, "deleted history entry");
        Ok(Some(removed))
    }
}

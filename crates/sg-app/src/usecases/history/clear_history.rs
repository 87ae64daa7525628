use anyhow::Result;
use std::sync::Arc;

use sg_core::history::{UndoSnapshot, UndoStash};
use sg_core::ports::{ClockPort, HistoryRepositoryPort, UndoStashPort};
use tracing::info;

/// Clear the whole history, keeping an undo snapshot of the old list.
pub struct ClearHistoryUseCase {
    history: Arc<dyn HistoryRepositoryPort>,
    undo: Arc<dyn UndoStashPort>,
    clock: Arc<dyn ClockPort>,
}

impl ClearHistoryUseCase {
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

    /// Returns how many entries were cleared.
    pub async fn execute(&self) -> Result<usize> {
        let entries = self.history.load().await?;
        if entries.is_empty() {
            return Ok(0);
        }

        let cleared = entries.len();
        self.undo
            .stash(&UndoStash::new(
                UndoSnapshot::List { entries },
                self.clock.now_ms(),
            ))
            .await?;
        self.history.save(&[]).await?;

        info!(cleared, "cleared history");
        Ok(cleared)
    }
}

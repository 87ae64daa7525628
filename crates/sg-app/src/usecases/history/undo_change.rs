use anyhow::Result;
use std::sync::Arc;

use sg_core::history::{self, HistoryEntry, UndoSnapshot};
use sg_core::ports::{ClockPort, HistoryRepositoryPort, UndoStashPort};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// A deleted entry went back to its old position.
    RestoredEntry(HistoryEntry),
    /// A cleared list came back, with this many entries.
    RestoredList(usize),
    /// The stash existed but its window had passed.
    Expired,
    /// Nothing to undo.
    Nothing,
}

/// Undo the most recent deletion within its 5-second window.
pub struct UndoHistoryChangeUseCase {
    history: Arc<dyn HistoryRepositoryPort>,
    undo: Arc<dyn UndoStashPort>,
    clock: Arc<dyn ClockPort>,
}

impl UndoHistoryChangeUseCase {
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

    pub async fn execute(&self) -> Result<UndoOutcome> {
        let Some(stash) = self.undo.take().await? else {
            return Ok(UndoOutcome::Nothing);
        };

        if stash.is_expired(self.clock.now_ms()) {
            info!("undo window has passed");
            return Ok(UndoOutcome::Expired);
        }

        match stash.snapshot {
            UndoSnapshot::Entry { entry, index } => {
                let entries = self.history.load().await?;
                let restored = history::restore_at(entries, entry.clone(), index);
                self.history.save(&restored).await?;
                Ok(UndoOutcome::RestoredEntry(entry))
            }
            UndoSnapshot::List { entries } => {
                let count = entries.len();
                self.history.save(&entries).await?;
                Ok(UndoOutcome::RestoredList(count))
            }
        }
    }
}

//! Single-slot, time-boxed undo for history deletions.

use serde::{Deserialize, Serialize};

use crate::history::HistoryEntry;

/// How long an undo stays possible after a deletion.
pub const UNDO_WINDOW_MS: i64 = 5_000;

/// What a deletion removed: one entry at a position, or the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UndoSnapshot {
    Entry { entry: HistoryEntry, index: usize },
    List { entries: Vec<HistoryEntry> },
}

/// The one prior snapshot held for undo. A new deletion overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoStash {
    pub snapshot: UndoSnapshot,
    pub saved_at_ms: i64,
}

impl UndoStash {
    pub fn new(snapshot: UndoSnapshot, saved_at_ms: i64) -> Self {
        Self {
            snapshot,
            saved_at_ms,
        }
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms.saturating_sub(self.saved_at_ms) >= UNDO_WINDOW_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_the_window() {
        let stash = UndoStash::new(UndoSnapshot::List { entries: vec![] }, 1_000);
        assert!(!stash.is_expired(1_000));
        assert!(!stash.is_expired(1_000 + UNDO_WINDOW_MS - 1));
        assert!(stash.is_expired(1_000 + UNDO_WINDOW_MS));
    }
}

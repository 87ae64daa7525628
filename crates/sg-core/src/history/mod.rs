//! Lookup history: the entry model and the pure list operations the
//! repository-backed use cases apply.

pub mod normalize;
pub mod undo;

use serde::{Deserialize, Serialize};

use crate::archive::ArchiveService;

pub use normalize::{normalize_history_url, TRACKING_PARAMS};
pub use undo::{UndoSnapshot, UndoStash, UNDO_WINDOW_MS};

/// How many lookups the history keeps.
pub const MAX_ENTRIES: usize = 5;

/// One recorded archive lookup, most recent first in the stored list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub title: String,
    pub url: String,
    /// Canonical dedup key; see [`normalize_history_url`].
    pub normalized_url: String,
    pub service: ArchiveService,
    pub archive_url: String,
    pub timestamp_ms: i64,
}

/// Insert `entry` at the front, superseding any entry with the same
/// normalized URL, and enforce the cap.
pub fn upsert(mut entries: Vec<HistoryEntry>, entry: HistoryEntry) -> Vec<HistoryEntry> {
    entries.retain(|e| e.normalized_url != entry.normalized_url);
    entries.insert(0, entry);
    entries.truncate(MAX_ENTRIES);
    entries
}

/// Keep only the newest entry per normalized URL, preserving order, and
/// enforce the cap. Used to self-heal lists written by older versions.
pub fn dedup(entries: Vec<HistoryEntry>) -> Vec<HistoryEntry> {
    let mut seen = std::collections::HashSet::new();
    let mut unique: Vec<HistoryEntry> = entries
        .into_iter()
        .filter(|e| seen.insert(e.normalized_url.clone()))
        .collect();
    unique.truncate(MAX_ENTRIES);
    unique
}

/// Remove the entry at `index`, returning the remaining list and the
/// removed entry. `None` if the index is out of bounds.
pub fn remove_at(
    mut entries: Vec<HistoryEntry>,
    index: usize,
) -> Option<(Vec<HistoryEntry>, HistoryEntry)> {
    if index >= entries.len() {
        return None;
    }
    let removed = entries.remove(index);
    Some((entries, removed))
}

/// Re-insert a previously removed entry at `index` (clamped to the list
/// end), enforcing the cap.
pub fn restore_at(
    mut entries: Vec<HistoryEntry>,
    entry: HistoryEntry,
    index: usize,
) -> Vec<HistoryEntry> {
    let at = index.min(entries.len());
    entries.insert(at, entry);
    entries.truncate(MAX_ENTRIES);
    entries
}

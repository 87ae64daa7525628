use async_trait::async_trait;

use crate::history::HistoryEntry;

/// Durable storage for the lookup-history list.
///
/// Stored most-recent-first; the pure operations in [`crate::history`]
/// maintain dedup and the cap, the repository only loads and saves.
#[async_trait]
pub trait HistoryRepositoryPort: Send + Sync {
    async fn load(&self) -> anyhow::Result<Vec<HistoryEntry>>;
    async fn save(&self, entries: &[HistoryEntry]) -> anyhow::Result<()>;
}

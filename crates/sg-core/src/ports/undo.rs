use async_trait::async_trait;

use crate::history::UndoStash;

/// Single-slot store for the history undo snapshot.
#[async_trait]
pub trait UndoStashPort: Send + Sync {
    /// Read and clear the slot in one step.
    async fn take(&self) -> anyhow::Result<Option<UndoStash>>;

    async fn stash(&self, stash: &UndoStash) -> anyhow::Result<()>;
}

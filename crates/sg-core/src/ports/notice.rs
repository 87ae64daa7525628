use async_trait::async_trait;

use crate::notice::PendingNotice;

/// Single-slot store for the pending failure notice.
#[async_trait]
pub trait PendingNoticePort: Send + Sync {
    /// Read and clear the slot in one step.
    async fn take(&self) -> anyhow::Result<Option<PendingNotice>>;

    async fn stash(&self, notice: &PendingNotice) -> anyhow::Result<()>;
}

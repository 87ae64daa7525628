//! Navigation sink - abstracts opening a resolved snapshot URL.

use async_trait::async_trait;

use super::document::DocumentId;

#[async_trait]
pub trait NavigationPort: Send + Sync {
    /// Open `url` in a new tab next to the active document.
    async fn open_in_new_tab(&self, url: &str) -> anyhow::Result<()>;

    /// Navigate the given document to `url`, preserving the ability to go
    /// back where the host supports it.
    async fn navigate_in_place(&self, document: &DocumentId, url: &str) -> anyhow::Result<()>;
}

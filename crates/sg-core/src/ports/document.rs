//! Active-document port - abstracts "the page the user is looking at".

use async_trait::async_trait;

/// Opaque handle to a browsing context, used only to navigate it later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The currently focused document's location and title.
///
/// Both strings are empty when no document is focused; the gatekeeper
/// rejects that downstream.
#[derive(Debug, Clone)]
pub struct ActiveDocument {
    pub url: String,
    pub title: String,
    pub id: DocumentId,
}

#[async_trait]
pub trait ActiveDocumentPort: Send + Sync {
    async fn active_document(&self) -> anyhow::Result<ActiveDocument>;
}

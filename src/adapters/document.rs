use async_trait::async_trait;
use sg_core::ports::{ActiveDocument, ActiveDocumentPort, DocumentId};

/// Active-document provider backed by command-line arguments.
///
/// The CLI has no browsing context of its own; the "active document" is
/// whatever URL (and optional title) the user passed in.
pub struct ArgsDocumentProvider {
    url: String,
    title: String,
}

impl ArgsDocumentProvider {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

#[async_trait]
impl ActiveDocumentPort for ArgsDocumentProvider {
    async fn active_document(&self) -> anyhow::Result<ActiveDocument> {
        Ok(ActiveDocument {
            url: self.url.clone(),
            title: self.title.clone(),
            id: DocumentId::new("cli"),
        })
    }
}

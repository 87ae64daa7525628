use anyhow::{Context, Result};
use async_trait::async_trait;
use sg_core::ports::{DocumentId, NavigationPort};
use tracing::debug;

/// Navigation sink that hands resolved snapshot URLs to the system
/// browser.
///
/// Outside a browser shell there is no tab model to navigate in place, so
/// both operations resolve to opening the URL; the browser itself decides
/// tab placement.
pub struct SystemBrowserNavigator;

impl SystemBrowserNavigator {
    async fn open(url: &str) -> Result<()> {
        let url = url.to_string();
        debug!(url = %url, "opening in system browser");
        tokio::task::spawn_blocking(move || webbrowser::open(&url))
            .await
            .context("browser open task failed")?
            .context("failed to open the system browser")?;
        Ok(())
    }
}

#[async_trait]
impl NavigationPort for SystemBrowserNavigator {
    async fn open_in_new_tab(&self, url: &str) -> Result<()> {
        Self::open(url).await
    }

    async fn navigate_in_place(&self, _document: &DocumentId, url: &str) -> Result<()> {
        Self::open(url).await
    }
}

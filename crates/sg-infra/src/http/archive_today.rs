//! Archive.today newest-snapshot probe.
//!
//! Hermetic rule:
//! - Redirected away from `newest/` => a snapshot exists, the final URL is
//!   the snapshot.
//! - 404, or still on `newest/` with the provider's no-results marker in
//!   the page => no snapshot.
//! - Still on `newest/` without the marker => ambiguous; neither confirm
//!   nor deny.
//! - Transport failure or deadline => uncertain; never guess.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, redirect, Client, StatusCode};
use sg_core::archive::{AbsenceReason, ResolutionOutcome, UncertainCause};
use sg_core::ports::ArchiveTodayProbePort;
use tracing::debug;

/// Production endpoint.
pub const ARCHIVE_TODAY_BASE: &str = "https://archive.today/";

/// Path segment of the "find newest snapshot" endpoint; the raw target
/// URL is appended verbatim, not re-encoded.
pub const NEWEST_PATH: &str = "newest/";

/// Marker text the provider renders when it has no captures for a URL.
const NO_RESULTS_MARKER: &str = "No results";

/// How much of the response body the disambiguation sniff may read.
const SNIFF_CAP_BYTES: usize = 4096;

pub struct ArchiveTodayClient {
    http: Client,
    base_url: String,
}

impl ArchiveTodayClient {
    /// Build a probe against the given base URL (must end with `/`).
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = Client::builder()
            .redirect(redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn default_endpoint() -> anyhow::Result<Self> {
        Self::new(ARCHIVE_TODAY_BASE)
    }

    async fn run_probe(&self, target_url: &str) -> ResolutionOutcome {
        let checked_url = format!("{}{}{}", self.base_url, NEWEST_PATH, target_url);
        debug!(url = %checked_url, "probing archive.today newest endpoint");

        let response = match self
            .http
            .get(&checked_url)
            .header(header::ACCEPT, "text/html")
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                debug!(error = %err, "archive.today probe failed");
                return ResolutionOutcome::uncertain(classify_transport(&err));
            }
        };

        // 404 from newest/ means: no snapshot exists, whatever the body says.
        if response.status() == StatusCode::NOT_FOUND {
            return ResolutionOutcome::absent(AbsenceReason::NotFound);
        }

        let final_url = response.url().to_string();
        let newest_segment = format!("/{NEWEST_PATH}");
        if final_url.contains(&newest_segment) {
            // No redirect to a concrete snapshot. Sniff a bounded prefix of
            // the page to tell "definitely nothing" from "page says nothing".
            return match sniff_for_marker(response).await {
                Ok(true) => ResolutionOutcome::absent(AbsenceReason::NoResults),
                Ok(false) => ResolutionOutcome::uncertain(UncertainCause::Ambiguous),
                Err(cause) => ResolutionOutcome::uncertain(cause),
            };
        }

        ResolutionOutcome::confirmed(final_url)
    }
}

#[async_trait]
impl ArchiveTodayProbePort for ArchiveTodayClient {
    async fn probe(&self, target_url: &str, timeout: Duration) -> ResolutionOutcome {
        match tokio::time::timeout(timeout, self.run_probe(target_url)).await {
            Ok(outcome) => outcome,
            // Cancellation drops the in-flight request.
            Err(_) => ResolutionOutcome::uncertain(UncertainCause::Timeout),
        }
    }
}

/// Read at most [`SNIFF_CAP_BYTES`] of the body and look for the
/// no-results marker; the rest of the stream is dropped unread.
async fn sniff_for_marker(mut response: reqwest::Response) -> Result<bool, UncertainCause> {
    let mut prefix = Vec::with_capacity(SNIFF_CAP_BYTES);
    while let Some(chunk) = response.chunk().await.map_err(|e| classify_transport(&e))? {
        prefix.extend_from_slice(&chunk);
        if prefix.len() >= SNIFF_CAP_BYTES {
            break;
        }
    }
    prefix.truncate(SNIFF_CAP_BYTES);
    Ok(String::from_utf8_lossy(&prefix).contains(NO_RESULTS_MARKER))
}

fn classify_transport(err: &reqwest::Error) -> UncertainCause {
    if err.is_timeout() {
        UncertainCause::Timeout
    } else {
        UncertainCause::Network
    }
}

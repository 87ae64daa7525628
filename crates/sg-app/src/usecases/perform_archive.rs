//! The archive dispatcher.
//!
//! One invocation walks START → GATEKEEPING → RESOLVING (→ RETRYING) →
//! SUCCEEDED | FAILED. The two providers are deliberately asymmetric:
//! Archive.today is hermetic (one timeout-only retry, then fail; an
//! unconfirmed result never opens anything), Wayback trusts a conclusive
//! quick-check "no" but falls through to the full lookup when the quick
//! check cannot be consulted.

use std::sync::Arc;

use anyhow::Result;
use sg_core::archive::{
    classify, ArchiveService, Budgets, InvalidUrlReason, ProbeError, ResolutionOutcome,
    RetryPolicy, UncertainCause, UrlClass,
};
use sg_core::failure::FailureCode;
use sg_core::history::{self, HistoryEntry};
use sg_core::ports::{
    ActiveDocument, ActiveDocumentPort, ArchiveTodayProbePort, ClockPort, HistoryRepositoryPort,
    NavigationPort, SettingsPort, WaybackProbePort,
};
use tracing::{debug, info, info_span, warn, Instrument};

/// A resolved and opened snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSuccess {
    pub archive_url: String,
    pub opened_in_new_tab: bool,
}

/// Internal step result: a typed failure for the user, or an unexpected
/// error that the boundary maps to `UNKNOWN_ERROR`.
enum StepError {
    Failure(FailureCode),
    Internal(anyhow::Error),
}

impl From<FailureCode> for StepError {
    fn from(code: FailureCode) -> Self {
        StepError::Failure(code)
    }
}

impl From<anyhow::Error> for StepError {
    fn from(err: anyhow::Error) -> Self {
        StepError::Internal(err)
    }
}

pub struct PerformArchiveUseCase {
    document: Arc<dyn ActiveDocumentPort>,
    navigation: Arc<dyn NavigationPort>,
    settings: Arc<dyn SettingsPort>,
    history: Arc<dyn HistoryRepositoryPort>,
    archive_today: Arc<dyn ArchiveTodayProbePort>,
    wayback: Arc<dyn WaybackProbePort>,
    clock: Arc<dyn ClockPort>,
    budgets: Budgets,
}

impl PerformArchiveUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        document: Arc<dyn ActiveDocumentPort>,
        navigation: Arc<dyn NavigationPort>,
        settings: Arc<dyn SettingsPort>,
        history: Arc<dyn HistoryRepositoryPort>,
        archive_today: Arc<dyn ArchiveTodayProbePort>,
        wayback: Arc<dyn WaybackProbePort>,
        clock: Arc<dyn ClockPort>,
        budgets: Budgets,
    ) -> Self {
        Self {
            document,
            navigation,
            settings,
            history,
            archive_today,
            wayback,
            clock,
            budgets,
        }
    }

    /// Run one archive gesture end to end.
    ///
    /// Every code path resolves to one of the two shapes; nothing escapes.
    pub async fn execute(&self) -> Result<ArchiveSuccess, FailureCode> {
        let span = info_span!("usecase.perform_archive.execute");

        async {
            match self.run().await {
                Ok(success) => {
                    info!(archive_url = %success.archive_url, "archive gesture succeeded");
                    Ok(success)
                }
                Err(StepError::Failure(code)) => {
                    info!(code = %code, "archive gesture failed");
                    Err(code)
                }
                Err(StepError::Internal(err)) => {
                    warn!(error = ?err, "archive gesture failed unexpectedly");
                    Err(FailureCode::UnknownError)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn run(&self) -> Result<ArchiveSuccess, StepError> {
        let document = self.document.active_document().await?;

        match classify(&document.url) {
            UrlClass::Valid => {}
            UrlClass::Invalid(InvalidUrlReason::Malformed) => {
                return Err(FailureCode::InvalidUrl.into());
            }
            UrlClass::Invalid(InvalidUrlReason::Unsupported) => {
                return Err(FailureCode::UnsupportedUrl.into());
            }
        }

        let settings = self.settings.load().await?;
        let service = settings.archive.service;

        let archive_url = match service {
            ArchiveService::ArchiveToday => self.resolve_archive_today(&document.url).await?,
            ArchiveService::Wayback => self.resolve_wayback(&document.url).await?,
        };

        // History is durable before the caller hears about success.
        self.record_history(&document, service, &archive_url).await?;

        let opened_in_new_tab = settings.archive.open_in_new_tab;
        if opened_in_new_tab {
            self.navigation.open_in_new_tab(&archive_url).await?;
        } else {
            self.navigation
                .navigate_in_place(&document.id, &archive_url)
                .await?;
        }

        Ok(ArchiveSuccess {
            archive_url,
            opened_in_new_tab,
        })
    }

    async fn resolve_archive_today(&self, url: &str) -> Result<String, StepError> {
        let policy = RetryPolicy::archive_today(&self.budgets);
        let outcome = policy
            .run(|timeout| self.archive_today.probe(url, timeout))
            .await;

        match outcome {
            ResolutionOutcome::Confirmed { archive_url } => Ok(archive_url),
            ResolutionOutcome::Absent { reason } => {
                debug!(?reason, "archive.today reports no snapshot");
                Err(FailureCode::NoSnapshotArchiveToday.into())
            }
            ResolutionOutcome::Uncertain {
                cause: UncertainCause::Timeout,
            } => Err(FailureCode::ArchiveTodayTimeout.into()),
            ResolutionOutcome::Uncertain {
                cause: UncertainCause::Network,
            } => Err(FailureCode::NetworkError.into()),
            ResolutionOutcome::Uncertain {
                cause: UncertainCause::Ambiguous,
            } => Err(FailureCode::ArchiveTodayUncertain.into()),
        }
    }

    async fn resolve_wayback(&self, url: &str) -> Result<String, StepError> {
        match self
            .wayback
            .quick_check(url, self.budgets.wayback_quick)
            .await
        {
            // A conclusive "no" is trusted; the full lookup never runs.
            Ok(false) => return Err(FailureCode::NoSnapshotWayback.into()),
            Ok(true) => {}
            Err(err) => {
                debug!(error = %err, "wayback quick check inconclusive, trying full lookup");
            }
        }

        match self
            .wayback
            .full_lookup(url, self.budgets.wayback_full)
            .await
        {
            Ok(Some(archive_url)) => Ok(archive_url),
            Ok(None) => Err(FailureCode::NoSnapshotWayback.into()),
            Err(ProbeError::Timeout) => Err(FailureCode::WaybackTimeout.into()),
            Err(ProbeError::Network(_)) => Err(FailureCode::WaybackError.into()),
        }
    }

    async fn record_history(
        &self,
        document: &ActiveDocument,
        service: ArchiveService,
        archive_url: &str,
    ) -> Result<()> {
        let entry = HistoryEntry {
            title: document.title.clone(),
            url: document.url.clone(),
            normalized_url: history::normalize_history_url(&document.url),
            service,
            archive_url: archive_url.to_string(),
            timestamp_ms: self.clock.now_ms(),
        };
        let entries = self.history.load().await?;
        self.history.save(&history::upsert(entries, entry)).await
    }
}

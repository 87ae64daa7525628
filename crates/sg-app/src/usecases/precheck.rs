//! Warm precheck: a single-slot memoized snapshot hint.
//!
//! The slot caches the in-flight (or finished) probe for the last request
//! and is invalidated by key comparison, so switching URL or provider
//! discards it. Concurrent callers for the same request share one probe.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use sg_core::archive::{ArchiveService, Budgets, ResolutionOutcome, ResolutionRequest};
use sg_core::ports::{ArchiveTodayProbePort, WaybackProbePort};
use tokio::sync::Mutex;
use tracing::debug;

/// What a precheck can tell the caller ahead of a real gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecheckHint {
    /// The provider very likely has a snapshot.
    Snapshot,
    /// The provider affirmatively has nothing.
    NoSnapshot,
    /// The provider could not be consulted conclusively.
    Unknown,
}

struct PrecheckSlot {
    request: ResolutionRequest,
    result: Shared<BoxFuture<'static, PrecheckHint>>,
}

pub struct WarmPrecheckUseCase {
    archive_today: Arc<dyn ArchiveTodayProbePort>,
    wayback: Arc<dyn WaybackProbePort>,
    budgets: Budgets,
    slot: Mutex<Option<PrecheckSlot>>,
}

impl WarmPrecheckUseCase {
    pub fn new(
        archive_today: Arc<dyn ArchiveTodayProbePort>,
        wayback: Arc<dyn WaybackProbePort>,
        budgets: Budgets,
    ) -> Self {
        Self {
            archive_today,
            wayback,
            budgets,
            slot: Mutex::new(None),
        }
    }

    /// Answer for `request`, probing at most once per distinct request.
    pub async fn hint(&self, request: ResolutionRequest) -> PrecheckHint {
        let shared = {
            let mut slot = self.slot.lock().await;
            match slot.as_ref() {
                Some(current) if current.request == request => current.result.clone(),
                _ => {
                    debug!(url = %request.target_url, "warming precheck slot");
                    let probe = Self::probe(
                        self.archive_today.clone(),
                        self.wayback.clone(),
                        self.budgets.clone(),
                        request.clone(),
                    )
                    .boxed()
                    .shared();
                    *slot = Some(PrecheckSlot {
                        request,
                        result: probe.clone(),
                    });
                    probe
                }
            }
        };
        shared.await
    }

    async fn probe(
        archive_today: Arc<dyn ArchiveTodayProbePort>,
        wayback: Arc<dyn WaybackProbePort>,
        budgets: Budgets,
        request: ResolutionRequest,
    ) -> PrecheckHint {
        match request.service {
            ArchiveService::ArchiveToday => {
                match archive_today
                    .probe(&request.target_url, budgets.archive_today_probe)
                    .await
                {
                    ResolutionOutcome::Confirmed { .. } => PrecheckHint::Snapshot,
                    ResolutionOutcome::Absent { .. } => PrecheckHint::NoSnapshot,
                    ResolutionOutcome::Uncertain { .. } => PrecheckHint::Unknown,
                }
            }
            ArchiveService::Wayback => {
                match wayback
                    .quick_check(&request.target_url, budgets.wayback_quick)
                    .await
                {
                    Ok(true) => PrecheckHint::Snapshot,
                    Ok(false) => PrecheckHint::NoSnapshot,
                    Err(_) => PrecheckHint::Unknown,
                }
            }
        }
    }
}

//! Resolver ports - one per archive provider.
//!
//! The two providers expose deliberately different shapes. Archive.today
//! is a single hermetic probe whose uncertainty is part of the outcome
//! value. Wayback is two-stage: a fallible quick check whose transport
//! errors the caller may ignore, and a deadline-capped full lookup.

use std::time::Duration;

use async_trait::async_trait;

use crate::archive::{ProbeError, ResolutionOutcome};

#[async_trait]
pub trait ArchiveTodayProbePort: Send + Sync {
    /// Probe the newest-snapshot endpoint for `target_url`. Exactly one
    /// outbound GET, bounded by `timeout` via cancellation; never errors.
    async fn probe(&self, target_url: &str, timeout: Duration) -> ResolutionOutcome;
}

#[async_trait]
pub trait WaybackProbePort: Send + Sync {
    /// Fast availability check. `Ok(false)` is a conclusive "no snapshot";
    /// transport failures are errors for the caller to interpret.
    async fn quick_check(&self, target_url: &str, timeout: Duration)
        -> Result<bool, ProbeError>;

    /// Precise lookup of the latest capture, capped by `deadline`.
    /// `Ok(None)` means the provider conclusively has nothing.
    async fn full_lookup(
        &self,
        target_url: &str,
        deadline: Duration,
    ) -> Result<Option<String>, ProbeError>;
}

use std::time::Duration;

/// Latency budgets for the outbound probes.
///
/// These trade snappy feedback against provider latency variance and are
/// kept independently tunable; the defaults match long-observed provider
/// behavior.
#[derive(Debug, Clone)]
pub struct Budgets {
    /// First Archive.today newest-snapshot probe.
    pub archive_today_probe: Duration,
    /// Extra budget granted to the single timeout retry.
    pub archive_today_retry_extra: Duration,
    /// Wayback availability quick check.
    pub wayback_quick: Duration,
    /// Hard cap on the Wayback full lookup (CDX + availability fallback).
    pub wayback_full: Duration,
}

impl Default for Budgets {
    fn default() -> Self {
        Self {
            archive_today_probe: Duration::from_millis(3500),
            archive_today_retry_extra: Duration::from_millis(2500),
            wayback_quick: Duration::from_millis(700),
            wayback_full: Duration::from_millis(8000),
        }
    }
}

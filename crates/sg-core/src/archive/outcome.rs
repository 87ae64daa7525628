use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::archive::service::ArchiveService;

/// Immutable input to a resolver: a validated absolute URL plus the
/// provider to consult.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolutionRequest {
    pub target_url: String,
    pub service: ArchiveService,
}

impl ResolutionRequest {
    pub fn new(target_url: impl Into<String>, service: ArchiveService) -> Self {
        Self {
            target_url: target_url.into(),
            service,
        }
    }
}

/// Why a provider affirmatively reported no snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsenceReason {
    /// The probe endpoint answered 404.
    NotFound,
    /// The provider's page carried its no-results marker.
    NoResults,
}

/// Why a probe could not reach a conclusive answer.
///
/// `Ambiguous` covers the Archive.today case where the probe stayed on the
/// `newest/` path without a no-results marker: the page neither confirmed
/// nor denied a snapshot. The dispatcher never retries on it and never
/// opens anything from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UncertainCause {
    Timeout,
    Network,
    Ambiguous,
}

/// Result of probing a provider for a snapshot of one URL.
///
/// Exactly one variant applies; only `Confirmed` carries a URL to open.
/// Uncertainty is a value, not an error: resolvers must never collapse a
/// timeout or transport failure into `Absent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    Confirmed { archive_url: String },
    Absent { reason: AbsenceReason },
    Uncertain { cause: UncertainCause },
}

impl ResolutionOutcome {
    pub fn confirmed(archive_url: impl Into<String>) -> Self {
        ResolutionOutcome::Confirmed {
            archive_url: archive_url.into(),
        }
    }

    pub fn absent(reason: AbsenceReason) -> Self {
        ResolutionOutcome::Absent { reason }
    }

    pub fn uncertain(cause: UncertainCause) -> Self {
        ResolutionOutcome::Uncertain { cause }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ResolutionOutcome::Uncertain {
                cause: UncertainCause::Timeout
            }
        )
    }
}

/// Transport-level failure of a Wayback probe stage.
///
/// Resolvers reject with this only for genuine transport problems; a
/// provider-confirmed "no snapshot" is a normal return value.
#[derive(Debug, Clone, Error)]
pub enum ProbeError {
    #[error("probe timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
}

impl From<&ProbeError> for UncertainCause {
    fn from(err: &ProbeError) -> Self {
        match err {
            ProbeError::Timeout => UncertainCause::Timeout,
            ProbeError::Network(_) => UncertainCause::Network,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncertain_never_carries_a_url() {
        let outcome = ResolutionOutcome::uncertain(UncertainCause::Timeout);
        assert!(outcome.is_timeout());
        match outcome {
            ResolutionOutcome::Confirmed { .. } => panic!("timeout must not confirm"),
            ResolutionOutcome::Absent { .. } => panic!("timeout must not report absence"),
            ResolutionOutcome::Uncertain { cause } => {
                assert_eq!(cause, UncertainCause::Timeout);
            }
        }
    }

    #[test]
    fn outcome_round_trips_through_json() {
        let outcome = ResolutionOutcome::confirmed("https://archive.today/2023/https://a.example");
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(serde_json::from_str::<ResolutionOutcome>(&json).unwrap(), outcome);
    }
}

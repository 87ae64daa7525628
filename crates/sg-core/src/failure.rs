//! The closed failure surface of an archive gesture.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Every way `perform archive` can fail, as surfaced to the user.
///
/// The serialized form is the stable wire code; new variants must be added
/// here (and matched everywhere) rather than smuggled through strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureCode {
    InvalidUrl,
    UnsupportedUrl,
    NoSnapshotArchiveToday,
    NoSnapshotWayback,
    ArchiveTodayTimeout,
    ArchiveTodayUncertain,
    NetworkError,
    WaybackTimeout,
    WaybackError,
    UnknownError,
}

impl FailureCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCode::InvalidUrl => "INVALID_URL",
            FailureCode::UnsupportedUrl => "UNSUPPORTED_URL",
            FailureCode::NoSnapshotArchiveToday => "NO_SNAPSHOT_ARCHIVE_TODAY",
            FailureCode::NoSnapshotWayback => "NO_SNAPSHOT_WAYBACK",
            FailureCode::ArchiveTodayTimeout => "ARCHIVE_TODAY_TIMEOUT",
            FailureCode::ArchiveTodayUncertain => "ARCHIVE_TODAY_UNCERTAIN",
            FailureCode::NetworkError => "NETWORK_ERROR",
            FailureCode::WaybackTimeout => "WAYBACK_TIMEOUT",
            FailureCode::WaybackError => "WAYBACK_ERROR",
            FailureCode::UnknownError => "UNKNOWN_ERROR",
        }
    }

    /// Actionable message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureCode::InvalidUrl => "Invalid URL detected.",
            FailureCode::UnsupportedUrl => "Cannot archive this type of page.",
            FailureCode::NoSnapshotArchiveToday => {
                "No snapshot available on Archive.Today for this URL."
            }
            FailureCode::NoSnapshotWayback => {
                "No archived version found in Wayback Machine for this URL."
            }
            FailureCode::WaybackTimeout => {
                "Request timed out. The archive service might be slow."
            }
            FailureCode::ArchiveTodayTimeout
            | FailureCode::ArchiveTodayUncertain
            | FailureCode::NetworkError => {
                "Couldn't verify a snapshot on Archive.Today (blocked or timed out)."
            }
            FailureCode::WaybackError | FailureCode::UnknownError => {
                "Service unavailable. Please try again or use the other archive option."
            }
        }
    }
}

impl Display for FailureCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for FailureCode {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_code_matches_display() {
        let json = serde_json::to_string(&FailureCode::NoSnapshotWayback).unwrap();
        assert_eq!(json, "\"NO_SNAPSHOT_WAYBACK\"");
        assert_eq!(
            FailureCode::NoSnapshotWayback.to_string(),
            "NO_SNAPSHOT_WAYBACK"
        );
    }

    #[test]
    fn every_code_has_a_message() {
        for code in [
            FailureCode::InvalidUrl,
            FailureCode::UnsupportedUrl,
            FailureCode::NoSnapshotArchiveToday,
            FailureCode::NoSnapshotWayback,
            FailureCode::ArchiveTodayTimeout,
            FailureCode::ArchiveTodayUncertain,
            FailureCode::NetworkError,
            FailureCode::WaybackTimeout,
            FailureCode::WaybackError,
            FailureCode::UnknownError,
        ] {
            assert!(!code.user_message().is_empty(), "{code}");
        }
    }
}

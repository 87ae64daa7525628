//! Pending failure notice.
//!
//! A gesture that fails outside an interactive surface stashes its failure
//! code; the next interactive invocation shows it once and clears the
//! slot. Stale notices are dropped silently.

use serde::{Deserialize, Serialize};

use crate::failure::FailureCode;

/// How long a stashed notice stays worth showing.
pub const NOTICE_TTL_MS: i64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingNotice {
    pub code: FailureCode,
    pub raised_at_ms: i64,
}

impl PendingNotice {
    pub fn new(code: FailureCode, raised_at_ms: i64) -> Self {
        Self { code, raised_at_ms }
    }

    pub fn is_fresh(&self, now_ms: i64) -> bool {
        now_ms.saturating_sub(self.raised_at_ms) < NOTICE_TTL_MS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freshness_window() {
        let notice = PendingNotice::new(FailureCode::WaybackTimeout, 5_000);
        assert!(notice.is_fresh(5_000));
        assert!(notice.is_fresh(5_000 + NOTICE_TTL_MS - 1));
        assert!(!notice.is_fresh(5_000 + NOTICE_TTL_MS));
    }
}

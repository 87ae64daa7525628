//! Bounded retry over a probe timeout schedule.

use std::future::Future;
use std::time::Duration;

use crate::archive::budgets::Budgets;
use crate::archive::outcome::ResolutionOutcome;

/// Explicit retry policy: one timeout budget per permitted attempt.
///
/// An attempt is repeated only when it came back `Uncertain(Timeout)`;
/// every other outcome (including other uncertainty causes) is final.
/// The schedule length bounds the attempt count, so no unbounded retry
/// loop is possible.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    timeouts: Vec<Duration>,
}

impl RetryPolicy {
    pub fn new(timeouts: Vec<Duration>) -> Self {
        debug_assert!(!timeouts.is_empty(), "retry policy needs at least one attempt");
        Self { timeouts }
    }

    /// The Archive.today schedule: one probe, one timeout retry with an
    /// extended budget.
    pub fn archive_today(budgets: &Budgets) -> Self {
        Self::new(vec![
            budgets.archive_today_probe,
            budgets.archive_today_probe + budgets.archive_today_retry_extra,
        ])
    }

    pub fn max_attempts(&self) -> usize {
        self.timeouts.len()
    }

    /// Run `attempt` with each scheduled timeout until it returns anything
    /// other than `Uncertain(Timeout)`, or the schedule is exhausted.
    pub async fn run<F, Fut>(&self, mut attempt: F) -> ResolutionOutcome
    where
        F: FnMut(Duration) -> Fut,
        Fut: Future<Output = ResolutionOutcome>,
    {
        let mut outcome = ResolutionOutcome::uncertain(crate::archive::UncertainCause::Timeout);
        for (i, timeout) in self.timeouts.iter().enumerate() {
            outcome = attempt(*timeout).await;
            if !outcome.is_timeout() || i + 1 == self.timeouts.len() {
                break;
            }
        }
        outcome
    }
}

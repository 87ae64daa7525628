//! Pending-notice plumbing.
//!
//! A gesture that fails without an interactive surface stashes its
//! failure code; the next interactive command drains the slot and shows
//! the message if it is still fresh.

use anyhow::Result;
use std::sync::Arc;

use sg_core::failure::FailureCode;
use sg_core::notice::PendingNotice;
use sg_core::ports::{ClockPort, PendingNoticePort};
use tracing::debug;

pub struct StashNoticeUseCase {
    notice: Arc<dyn PendingNoticePort>,
    clock: Arc<dyn ClockPort>,
}

impl StashNoticeUseCase {
    pub fn new(notice: Arc<dyn PendingNoticePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { notice, clock }
    }

    pub async fn execute(&self, code: FailureCode) -> Result<()> {
        self.notice
            .stash(&PendingNotice::new(code, self.clock.now_ms()))
            .await
    }
}

pub struct TakePendingNoticeUseCase {
    notice: Arc<dyn PendingNoticePort>,
    clock: Arc<dyn ClockPort>,
}

impl TakePendingNoticeUseCase {
    pub fn new(notice: Arc<dyn PendingNoticePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self { notice, clock }
    }

    /// Drain the slot; a stale notice is dropped silently.
    pub async fn execute(&self) -> Result<Option<FailureCode>> {
        let Some(notice) = self.notice.take().await? else {
            return Ok(None);
        };

        if !notice.is_fresh(self.clock.now_ms()) {
            debug!(code = %notice.code, "dropping stale pending notice");
            return Ok(None);
        }

        Ok(Some(notice.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sg_core::notice::NOTICE_TTL_MS;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemorySlot {
        notice: Mutex<Option<PendingNotice>>,
    }

    #[async_trait]
    impl PendingNoticePort for InMemorySlot {
        async fn take(&self) -> anyhow::Result<Option<PendingNotice>> {
            Ok(self.notice.lock().unwrap().take())
        }

        async fn stash(&self, notice: &PendingNotice) -> anyhow::Result<()> {
            *self.notice.lock().unwrap() = Some(notice.clone());
            Ok(())
        }
    }

    struct FixedClock(i64);

    impl ClockPort for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    #[tokio::test]
    async fn fresh_notice_is_surfaced_once() {
        let slot = Arc::new(InMemorySlot::default());

        StashNoticeUseCase::new(slot.clone(), Arc::new(FixedClock(1_000)))
            .execute(FailureCode::NoSnapshotWayback)
            .await
            .unwrap();

        let take = TakePendingNoticeUseCase::new(slot, Arc::new(FixedClock(2_000)));
        assert_eq!(
            take.execute().await.unwrap(),
            Some(FailureCode::NoSnapshotWayback)
        );
        // The slot is drained.
        assert_eq!(take.execute().await.unwrap(), None);
    }

    #[tokio::test]
    async fn stale_notice_is_dropped_silently() {
        let slot = Arc::new(InMemorySlot::default());

        StashNoticeUseCase::new(slot.clone(), Arc::new(FixedClock(1_000)))
            .execute(FailureCode::NetworkError)
            .await
            .unwrap();

        let take = TakePendingNoticeUseCase::new(slot, Arc::new(FixedClock(1_000 + NOTICE_TTL_MS)));
        assert_eq!(take.execute().await.unwrap(), None);
    }
}

//! Shell dependency grouping.
//!
//! One struct of the ports every command draws from; `assemble` wires the
//! production adapters. Plain parameter grouping, not a builder.

use anyhow::Result;
use std::sync::Arc;

use sg_core::archive::Budgets;
use sg_core::ports::{
    ArchiveTodayProbePort, ClockPort, HistoryRepositoryPort, NavigationPort, PendingNoticePort,
    SettingsPort, UndoStashPort, WaybackProbePort,
};
use sg_infra::store::paths;
use sg_infra::{
    ArchiveTodayClient, FileHistoryRepository, FileSettingsRepository, FileSlotRepository,
    SystemBrowserNavigator, SystemClock, WaybackClient,
};

pub struct ShellDeps {
    pub navigation: Arc<dyn NavigationPort>,
    pub settings: Arc<dyn SettingsPort>,
    pub history: Arc<dyn HistoryRepositoryPort>,
    pub notice: Arc<dyn PendingNoticePort>,
    pub undo: Arc<dyn UndoStashPort>,
    pub archive_today: Arc<dyn ArchiveTodayProbePort>,
    pub wayback: Arc<dyn WaybackProbePort>,
    pub clock: Arc<dyn ClockPort>,
    pub budgets: Budgets,
}

impl ShellDeps {
    pub fn assemble() -> Result<Self> {
        Ok(Self {
            navigation: Arc::new(SystemBrowserNavigator),
            settings: Arc::new(FileSettingsRepository::new(paths::settings_path()?)),
            history: Arc::new(FileHistoryRepository::new(paths::history_path()?)),
            notice: Arc::new(FileSlotRepository::new(paths::notice_path()?)),
            undo: Arc::new(FileSlotRepository::new(paths::undo_path()?)),
            archive_today: Arc::new(ArchiveTodayClient::default_endpoint()?),
            wayback: Arc::new(WaybackClient::default_endpoints()?),
            clock: Arc::new(SystemClock),
            budgets: Budgets::default(),
        })
    }
}

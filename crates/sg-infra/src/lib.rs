//! Infrastructure adapters for Snapgate: reqwest-backed archive probes,
//! file-backed repositories, the system clock and the browser navigator.

pub mod http;
pub mod nav;
pub mod store;
pub mod time;

pub use http::archive_today::ArchiveTodayClient;
pub use http::wayback::WaybackClient;
pub use nav::browser::SystemBrowserNavigator;
pub use store::history_repo::FileHistoryRepository;
pub use store::settings_repo::FileSettingsRepository;
pub use store::slot_repo::FileSlotRepository;
pub use time::system_clock::SystemClock;

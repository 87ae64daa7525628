//! Port traits the use cases are written against.
//!
//! Adapters live in `sg-infra` (HTTP probes, file repositories, clock,
//! navigator) and in the shell (active document provider).

mod clock;
mod document;
mod history;
mod navigation;
mod notice;
mod probe;
mod settings;
mod undo;

pub use clock::ClockPort;
pub use document::{ActiveDocument, ActiveDocumentPort, DocumentId};
pub use history::HistoryRepositoryPort;
pub use navigation::NavigationPort;
pub use notice::PendingNoticePort;
pub use probe::{ArchiveTodayProbePort, WaybackProbePort};
pub use settings::{SettingsMigrationPort, SettingsPort};
pub use undo::UndoStashPort;

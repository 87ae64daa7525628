pub mod clear_history;
pub mod delete_entry;
pub mod list_history;
pub mod undo_change;

pub use clear_history::ClearHistoryUseCase;
pub use delete_entry::DeleteHistoryEntryUseCase;
pub use list_history::ListHistoryUseCase;
pub use undo_change::{UndoHistoryChangeUseCase, UndoOutcome};

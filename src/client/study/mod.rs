//! Study session state, kept free of UI code so it runs in native tests.

mod history;
mod session;
mod storage;

pub use history::{StudyHistory, StudyHistoryEntry, HISTORY_KEY, MAX_HISTORY_ENTRIES};
pub use session::{format_elapsed, RecordOutcome, StudyCommand, StudySession, StudySummary};
pub use storage::{KeyValueStorage, MemoryStorage, StorageError};

#[cfg(feature = "web")]
pub use storage::BrowserStorage;

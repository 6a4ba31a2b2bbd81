use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::storage::{KeyValueStorage, StorageError};

pub const HISTORY_KEY: &str = "study-history";
pub const MAX_HISTORY_ENTRIES: usize = 100;

/// One finished study session.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StudyHistoryEntry {
    pub deck_id: Uuid,
    pub deck_name: String,
    pub total: usize,
    pub known: usize,
    pub unknown: usize,
    pub elapsed_seconds: u64,
    pub timestamp: DateTime<Utc>,
}

/// Finished sessions, newest first.
pub struct StudyHistory<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> StudyHistory<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Gets the stored entries. Missing or malformed history reads as empty.
    pub fn entries(&self) -> Vec<StudyHistoryEntry> {
        self.storage
            .get(HISTORY_KEY)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    /// Prepends `entry`, keeping at most `MAX_HISTORY_ENTRIES`.
    pub fn record(&mut self, entry: StudyHistoryEntry) -> Result<(), StorageError> {
        let mut entries = self.entries();
        entries.insert(0, entry);
        entries.truncate(MAX_HISTORY_ENTRIES);

        self.save(&entries)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.save(&[])
    }

    fn save(&mut self, entries: &[StudyHistoryEntry]) -> Result<(), StorageError> {
        let value = serde_json::to_value(entries).map_err(|e| StorageError {
            message: format!("Failed to serialize study history: {}", e),
        })?;

        self.storage.set(HISTORY_KEY, value)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::client::study::MemoryStorage;

    fn entry(known: usize) -> StudyHistoryEntry {
        StudyHistoryEntry {
            deck_id: Uuid::new_v4(),
            deck_name: "Spanish".to_string(),
            total: 10,
            known,
            unknown: 10 - known,
            elapsed_seconds: 95,
            timestamp: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
                + Duration::minutes(known as i64),
        }
    }

    /// Expected: newest entry first
    #[test]
    fn records_newest_first() {
        let mut history = StudyHistory::new(MemoryStorage::default());

        history.record(entry(1)).unwrap();
        history.record(entry(2)).unwrap();

        let entries = history.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].known, 2);
        assert_eq!(entries[1].known, 1);
    }

    /// Expected: the oldest entries are dropped past the cap
    #[test]
    fn keeps_most_recent_hundred() {
        let mut history = StudyHistory::new(MemoryStorage::default());

        for known in 0..=MAX_HISTORY_ENTRIES {
            history.record(entry(known % 10)).unwrap();
        }
        let mut last = entry(7);
        last.deck_name = "Latest".to_string();
        history.record(last).unwrap();

        let entries = history.entries();
        assert_eq!(entries.len(), MAX_HISTORY_ENTRIES);
        assert_eq!(entries[0].deck_name, "Latest");
    }

    /// Expected: unreadable storage yields an empty history that can be overwritten
    #[test]
    fn malformed_history_reads_empty() {
        let mut storage = MemoryStorage::default();
        storage
            .set(HISTORY_KEY, serde_json::json!({"not": "a list"}))
            .unwrap();
        let mut history = StudyHistory::new(storage);

        assert!(history.entries().is_empty());

        history.record(entry(3)).unwrap();
        assert_eq!(history.entries().len(), 1);
    }

    /// Expected: clear removes every entry
    #[test]
    fn clear_empties_history() {
        let mut history = StudyHistory::new(MemoryStorage::default());
        history.record(entry(4)).unwrap();

        history.clear().unwrap();

        assert!(history.entries().is_empty());
    }
}

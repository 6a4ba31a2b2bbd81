use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    client::study::history::StudyHistoryEntry,
    model::card::{CardDto, CardStatus},
};

/// User input understood by the study view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudyCommand {
    Prev,
    Next,
    Flip,
    StudyAgain,
    BackToDeck,
}

impl StudyCommand {
    /// Maps a keyboard `key` value to a command.
    ///
    /// Arrow keys and space drive the cards; once the summary is shown only
    /// `Enter` and `Escape` apply.
    pub fn from_key(key: &str, summary_open: bool) -> Option<Self> {
        if summary_open {
            return match key {
                "Enter" => Some(Self::StudyAgain),
                "Escape" => Some(Self::BackToDeck),
                _ => None,
            };
        }

        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            " " => Some(Self::Flip),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RecordOutcome {
    Advanced,
    Finished(StudySummary),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StudySummary {
    pub total: usize,
    pub known: usize,
    pub unknown: usize,
    pub elapsed_seconds: u64,
}

impl StudySummary {
    /// Share of known cards as a rounded percentage.
    pub fn known_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.known as f64 * 100.0 / self.total as f64).round() as u32
    }

    pub fn elapsed_label(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

/// Formats seconds as `m:ss`.
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Sequential cursor over the cards of one study run.
#[derive(Clone, Debug, PartialEq)]
pub struct StudySession {
    cards: Vec<CardDto>,
    index: usize,
    flipped: bool,
    actions_visible: bool,
    /// Latest answer per card; answering again replaces it.
    results: HashMap<Uuid, CardStatus>,
    elapsed_seconds: u64,
    finished: bool,
}

impl StudySession {
    pub fn new(cards: Vec<CardDto>) -> Self {
        Self {
            cards,
            index: 0,
            flipped: false,
            actions_visible: false,
            results: HashMap::new(),
            elapsed_seconds: 0,
            finished: false,
        }
    }

    pub fn current(&self) -> Option<&CardDto> {
        self.cards.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.cards.len()
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Whether accept/reject is offered for the current card.
    pub fn actions_visible(&self) -> bool {
        self.actions_visible
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Turns the current card over. The first flip reveals the review actions.
    pub fn flip(&mut self) {
        if self.finished || self.cards.is_empty() {
            return;
        }
        self.flipped = !self.flipped;
        if self.flipped {
            self.actions_visible = true;
        }
    }

    pub fn next(&mut self) {
        if !self.finished && !self.is_last() {
            self.move_to(self.index + 1);
        }
    }

    pub fn prev(&mut self) {
        if !self.finished && self.index > 0 {
            self.move_to(self.index - 1);
        }
    }

    /// Records the answer for the current card after the server accepted it.
    ///
    /// The last card finishes the session; any other card advances the cursor.
    /// Returns `None` when there is nothing to record.
    pub fn record(&mut self, status: CardStatus) -> Option<RecordOutcome> {
        if self.finished {
            return None;
        }
        let card_id = self.current()?.id;

        self.results.insert(card_id, status);

        if self.is_last() {
            self.finished = true;
            Some(RecordOutcome::Finished(self.summary()))
        } else {
            self.move_to(self.index + 1);
            Some(RecordOutcome::Advanced)
        }
    }

    /// Advances the timer by one second while the session is running.
    pub fn tick(&mut self) {
        if !self.finished && !self.cards.is_empty() {
            self.elapsed_seconds += 1;
        }
    }

    pub fn summary(&self) -> StudySummary {
        let count = |wanted: CardStatus| {
            self.results
                .values()
                .filter(|status| **status == wanted)
                .count()
        };

        StudySummary {
            total: self.cards.len(),
            known: count(CardStatus::Accepted),
            unknown: count(CardStatus::Rejected),
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    pub fn history_entry(
        &self,
        deck_id: Uuid,
        deck_name: String,
        timestamp: DateTime<Utc>,
    ) -> StudyHistoryEntry {
        let summary = self.summary();
        StudyHistoryEntry {
            deck_id,
            deck_name,
            total: summary.total,
            known: summary.known,
            unknown: summary.unknown,
            elapsed_seconds: summary.elapsed_seconds,
            timestamp,
        }
    }

    /// Starts over with the same cards.
    pub fn restart(&mut self) {
        *self = Self::new(std::mem::take(&mut self.cards));
    }

    fn move_to(&mut self, index: usize) {
        self.index = index;
        self.flipped = false;
        self.actions_visible = false;
    }
}

// src/models/session.rs

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::{
    models::{question::QuestionBank, ranking::RankingEntry},
    timing::clock::non_negative,
};

/// Which screen the visitor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Active,
    Finished,
}

/// One visitor's progress through the quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionState {
    /// Index of the next question to answer. Never exceeds the bank length.
    pub current_index: usize,
    pub score: u32,
    pub started_at: DateTime<Utc>,
    /// True exactly when `current_index` has reached the bank length.
    pub finished: bool,
    /// Set once the player has put their result on the ranking.
    pub registered: Option<RankingEntry>,
}

impl SessionState {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            current_index: 0,
            score: 0,
            started_at: now,
            finished: false,
            registered: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else {
            Phase::Active
        }
    }

    /// Records the answer to the current question and moves on.
    ///
    /// Returns whether the answer was correct, or `None` when the quiz is
    /// already over.
    pub fn advance(&mut self, bank: &QuestionBank, selected: &str) -> Option<bool> {
        if self.finished {
            return None;
        }
        let question = bank.get(self.current_index)?;

        let correct = selected == question.answer;
        if correct {
            self.score += 1;
        }

        self.current_index += 1;
        if self.current_index >= bank.len() {
            self.finished = true;
        }

        Some(correct)
    }

    /// Discards all progress. The new start is strictly later than the old one.
    pub fn restart(&mut self, now: DateTime<Utc>) {
        let floor = self.started_at + TimeDelta::milliseconds(1);
        *self = Self::new(now.max(floor));
    }

    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        non_negative(now - self.started_at)
    }

    /// Elapsed seconds rounded to one decimal place, as recorded on the ranking.
    pub fn time_taken_seconds(&self, now: DateTime<Utc>) -> f64 {
        let tenths = (self.elapsed(now).as_millis() as f64 / 100.0).round();
        tenths / 10.0
    }
}

//! Per participant, per game running tally.

use crate::ResultRecord;
use std::collections::HashSet;

/// Completions, failures and total score for one (participant, game) cell.
///
/// Puzzle indices are sets: the same day reported twice counts once. An index
/// is never both completed and failed; a completion wins over a failure for
/// the same puzzle.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    completed: HashSet<i64>,
    failed: HashSet<i64>,
    total_guesses: u64,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: ResultRecord) {
        let index = result.puzzle_index;
        if result.completed {
            if self.completed.insert(index) {
                self.failed.remove(&index);
                self.total_guesses += u64::from(result.guess_count);
            }
        } else if !self.completed.contains(&index) {
            self.failed.insert(index);
        }
    }

    pub fn completed(&self) -> usize {
        self.completed.len()
    }

    pub fn attempts(&self) -> usize {
        self.completed.len() + self.failed.len()
    }

    /// Mean score over completed puzzles; exactly `0.0` without completions.
    pub fn average_guesses(&self) -> f64 {
        if self.completed.is_empty() { 0.0 } else { self.total_guesses as f64 / self.completed.len() as f64 }
    }

    /// Whether every attempt was a completion.
    pub fn is_perfect(&self) -> bool {
        self.failed.is_empty()
    }
}

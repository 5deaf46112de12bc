//! Summary engine: attribution, dispatch, ranking and rendering.
//!
//! ```text
//! Message { body, address }
//!     │
//!     │  by_address lookup ──▶ unknown sender / empty body: dropped
//!     v
//! for each Recognizer (name order)
//!     identify(body) ──▶ Some(ResultRecord) ──▶ tallies[participant][game].record
//!     │
//!     v
//! render()
//!     - range of 0 days        -> notice, no section
//!     - completions ranking    (ranking.rs)
//!     - average ranking        (ranking.rs)
//!     - section text           (render.rs)
//! ```
//!
//! The tally table is allocated in [`ChatSummary::new`] and never resized:
//! one row per participant, one column per recognizer.
//!
//! ## Responsibilities by module
//!
//! - `metrics.rs`: counters collected while populating.
//! - `ranking.rs`: the two orderings of participants for one game.
//! - `render.rs`: section and report formatting.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/ranking.rs"]
mod ranking;
#[path = "engine/render.rs"]
mod render;

pub use metrics::PopulateStats;
pub use render::Report;

use crate::{Message, Participant, Recognizer, Tally};
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, trace};

#[derive(Debug)]
pub struct ChatSummary {
    participants: Vec<Participant>,
    recognizers: Vec<Recognizer>,
    /// `tallies[participant][recognizer]`
    tallies: Vec<Vec<Tally>>,
    by_address: HashMap<String, usize>,
}

impl ChatSummary {
    /// Build the engine. Recognizers are reordered by name; the participant
    /// order is kept and used to break ranking ties.
    pub fn new(participants: Vec<Participant>, mut recognizers: Vec<Recognizer>) -> Self {
        recognizers.sort_by_key(|r| r.name());

        let mut by_address = HashMap::with_capacity(participants.len());
        for (idx, participant) in participants.iter().enumerate() {
            by_address.entry(participant.address.clone()).or_insert(idx);
        }

        let tallies = vec![vec![Tally::default(); recognizers.len()]; participants.len()];

        Self { participants, recognizers, tallies, by_address }
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn recognizers(&self) -> &[Recognizer] {
        &self.recognizers
    }

    /// Tally of `participant` for `recognizer`, both as indices into
    /// [`participants`](Self::participants) and [`recognizers`](Self::recognizers).
    pub fn tally(&self, participant: usize, recognizer: usize) -> Option<&Tally> {
        self.tallies.get(participant)?.get(recognizer)
    }

    /// Consume `messages` once, feeding every attributable message to every
    /// recognizer.
    pub fn populate<I>(&mut self, messages: I) -> PopulateStats
    where
        I: IntoIterator<Item = Message>,
    {
        let start = Instant::now();
        let mut stats = PopulateStats::new(self.recognizers.iter().map(Recognizer::name));

        for message in messages {
            stats.messages += 1;

            let Some(&participant) = self.by_address.get(message.address.as_str()) else {
                trace!(address = %message.address, "dropping message from unknown sender");
                stats.unattributed += 1;
                continue;
            };
            if message.body.is_empty() {
                stats.empty += 1;
                continue;
            }
            stats.attributed += 1;

            let row = &mut self.tallies[participant];
            for (col, recognizer) in self.recognizers.iter_mut().enumerate() {
                if let Some(result) = recognizer.identify(&message.body) {
                    trace!(game = recognizer.name(), ?result, "recorded");
                    row[col].record(result);
                    stats.hits[col].1 += 1;
                }
            }
        }

        stats.elapsed = start.elapsed();
        debug!(
            messages = stats.messages,
            attributed = stats.attributed,
            unattributed = stats.unattributed,
            empty = stats.empty,
            elapsed = ?stats.elapsed,
            "populated chat summary"
        );
        stats
    }

    /// Render the leaderboard.
    ///
    /// Takes `&self`: rankings sort index permutations, so repeated calls
    /// produce the same report.
    pub fn render(&self) -> Report {
        let width = self.participants.iter().map(|p| p.display_name.chars().count()).max().unwrap_or(0);
        let mut report = Report::default();
        let mut sections = Vec::new();

        for (col, recognizer) in self.recognizers.iter().enumerate() {
            if recognizer.range().span() == 0 {
                debug!(game = recognizer.name(), range = ?recognizer.range().bounds(), "no messages found");
                report.notices.push(render::missing_notice(recognizer));
                continue;
            }

            let column: Vec<&Tally> = self.tallies.iter().map(|row| &row[col]).collect();
            let completions = ranking::by_completions(&column);
            let averages = ranking::by_average(&column);
            sections.push(render::section(recognizer, &self.participants, &column, &completions, &averages, width));
        }

        report.text = sections.join("\n\n");
        report
    }
}

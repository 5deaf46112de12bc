//! Populate-pass metrics.
//!
//! Counters are cheap and always collected; the binary prints them with
//! `--stats` and the engine logs them at `debug`.

use std::time::Duration;

/// What happened to the messages handed to [`ChatSummary::populate`](crate::ChatSummary::populate).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PopulateStats {
    /// Messages read from the source.
    pub messages: usize,
    /// Messages matched to a participant with a non-empty body.
    pub attributed: usize,
    /// Messages whose address matched no participant.
    pub unattributed: usize,
    /// Attributable messages with an empty body.
    pub empty: usize,
    /// Results recorded per game, in recognizer order.
    pub hits: Vec<(&'static str, usize)>,
    /// Elapsed time for the pass.
    pub elapsed: Duration,
}

impl PopulateStats {
    pub(crate) fn new(games: impl Iterator<Item = &'static str>) -> Self {
        Self { hits: games.map(|name| (name, 0)).collect(), ..Self::default() }
    }

    /// Results recorded for `game`, 0 for unknown names.
    pub fn hits_for(&self, game: &str) -> usize {
        self.hits.iter().find(|(name, _)| *name == game).map_or(0, |&(_, n)| n)
    }

    /// Total results recorded across games.
    pub fn total_hits(&self) -> usize {
        self.hits.iter().map(|&(_, n)| n).sum()
    }
}

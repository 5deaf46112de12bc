//! Puzzle formats and their registry.
//!
//! Each supported game is a static [`Game`] table: a name, two rendering
//! strings, a start-anchored regex and a `scan` function that turns the regex
//! captures into a [`Sighting`]. Tables are stateless; the per-run observed
//! range lives in [`Recognizer`](crate::Recognizer).
//!
//! ```text
//! raw text ── strip_noise ── pattern.captures ── scan ──▶ Sighting
//!                                 │                 │
//!                                 └─ no match       └─ None (malformed)
//! ```
//!
//! ## Adding a game
//!
//! Write a module under `src/games/` exposing `fn game() -> Game` (see the
//! `game!` macro) and add it to [`all`]. The CLI flag and the report section
//! follow from the registry.

#[path = "games/betweenle.rs"]
mod betweenle;
#[path = "games/connections.rs"]
mod connections;
#[path = "games/helpers.rs"]
mod helpers;
#[path = "games/mini.rs"]
mod mini;
#[path = "games/nerdle.rs"]
mod nerdle;
#[path = "games/strands.rs"]
mod strands;
#[path = "games/wordle.rs"]
mod wordle;

use crate::{Context, Recognizer, ResultRecord};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub(crate) use helpers::strip_noise;

static GAMES: Lazy<Vec<Game>> = Lazy::new(|| {
    let mut games = vec![
        betweenle::game(),
        connections::game(),
        mini::game(),
        nerdle::game(),
        strands::game(),
        wordle::game(),
    ];
    games.sort_by_key(|g| g.name);
    games
});

/// Turns the captures of a matched message into a sighting.
///
/// Receives the whole (noise-stripped) text too, for games that look past the
/// first line. Returns `None` when the captures are structurally valid for the
/// regex but not for the game (an impossible date, an unparsable index).
pub(crate) type Scan = fn(&Captures<'_>, &str, &Context) -> Option<Sighting>;

/// Static description of one puzzle format.
pub struct Game {
    /// Stable identifier; also the long CLI flag (`--Wordle`).
    pub name: &'static str,
    /// Emoji decoration around the report section heading.
    pub label: &'static str,
    /// Unit of the average ranking (`GUESSES`, `TIME (S)`, ...).
    pub heading: &'static str,
    pub(crate) pattern: &'static Regex,
    pub(crate) scan: Scan,
}

impl Game {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn display_label(&self) -> &'static str {
        self.label
    }

    pub fn report_heading(&self) -> &'static str {
        self.heading
    }

    /// Short CLI flag: the first letter of the name.
    pub fn short_flag(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Match `text` without touching any range state.
    pub(crate) fn sight(&self, text: &str, context: &Context) -> Option<Sighting> {
        let caps = self.pattern.captures(text)?;
        (self.scan)(&caps, text, context)
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("name", &self.name)
            .field("heading", &self.heading)
            .field("pattern", &self.pattern.as_str())
            .field("scan", &"<function>")
            .finish()
    }
}

/// A structural match: the message names a puzzle.
///
/// `outcome` is `None` when the header was recognized but the body carries no
/// verdict (a Connections header without a grid). The index still counts
/// towards the observed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Sighting {
    pub index: i64,
    pub outcome: Option<Outcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Solved(u32),
    Failed,
}

impl Sighting {
    pub fn solved(index: i64, score: u32) -> Self {
        Self { index, outcome: Some(Outcome::Solved(score)) }
    }

    pub fn failed(index: i64) -> Self {
        Self { index, outcome: Some(Outcome::Failed) }
    }

    pub fn undecided(index: i64) -> Self {
        Self { index, outcome: None }
    }

    pub fn record(&self) -> Option<ResultRecord> {
        match self.outcome? {
            Outcome::Solved(score) => Some(ResultRecord::solved(self.index, score)),
            Outcome::Failed => Some(ResultRecord::failed(self.index)),
        }
    }
}

/// Every registered game, sorted by name.
pub fn all() -> &'static [Game] {
    &GAMES
}

/// Look a game up by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Game> {
    all().iter().find(|g| g.name.eq_ignore_ascii_case(name))
}

/// Fresh recognizers for every registered game.
pub fn recognizers(context: &Context) -> Vec<Recognizer> {
    all().iter().map(|game| Recognizer::new(game, context.clone())).collect()
}

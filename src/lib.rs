//! Daily puzzle leaderboards from group chat messages.
//!
//! People paste their Wordle/Connections/Strands results into a group chat.
//! This crate turns those messages into a per-game leaderboard:
//!
//! ```text
//! messages ──┐
//!            │  ChatSummary::populate      (engine.rs)
//!            │    - match sender address -> Participant
//!            │    - Recognizer::identify   (recognizer.rs, games/*)
//!            │    - Tally::record          (score.rs)
//!            v
//!      tally table [participant][game]
//!            │
//!            │  ChatSummary::render
//!            │    - completions ranking (stable, descending)
//!            │    - average ranking (ascending, "no data" last)
//!            v
//!          Report
//! ```
//!
//! # Example
//! ```
//! use chat_summary::{ChatSummary, Context, Message, Participant, games};
//!
//! let people = vec![Participant::new("Alice", "+100"), Participant::new("Me", "")];
//! let mut summary = ChatSummary::new(people, games::recognizers(&Context::default()));
//! summary.populate(vec![Message::new("Wordle 456 4/6", "+100"), Message::new("Wordle 457 3/6", "+100")]);
//!
//! let report = summary.render();
//! assert!(report.text.contains("WORDLE"));
//! ```

#[macro_use]
mod macros;
mod engine;
pub mod games;
mod recognizer;
mod score;
pub mod transcript;

use chrono::{Local, NaiveDate};
use serde::Deserialize;

pub use engine::{ChatSummary, PopulateStats, Report};
pub use games::Game;
pub use recognizer::{ObservedRange, Recognizer};
pub use score::Tally;
pub use transcript::{MessageSink, MessageSource, SinkError, SourceError, Transcript, WriterSink};

/// Parsing context.
///
/// Holds what a recognizer needs from the environment. Date-indexed games
/// (the Mini crossword) number their puzzles by days elapsed before
/// `reference_date`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub reference_date: NaiveDate,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            Self { reference_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap() }
        } else {
            Self { reference_date: Local::now().date_naive() }
        }
    }
}

/// A chat member. `address` joins messages to members; the local user has an
/// empty address because self-sent messages carry none.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Participant {
    pub display_name: String,
    #[serde(default)]
    pub address: String,
}

impl Participant {
    pub fn new(display_name: impl Into<String>, address: impl Into<String>) -> Self {
        Self { display_name: display_name.into(), address: address.into() }
    }

    /// The user running the summary.
    pub fn local(display_name: impl Into<String>) -> Self {
        Self::new(display_name, "")
    }
}

/// One raw chat message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    pub body: String,
    #[serde(default, deserialize_with = "null_as_local")]
    pub address: String,
}

impl Message {
    pub fn new(body: impl Into<String>, address: impl Into<String>) -> Self {
        Self { body: body.into(), address: address.into() }
    }
}

fn null_as_local<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Result of matching one message against one game.
///
/// `guess_count` is only meaningful when `completed`; failures carry `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultRecord {
    pub puzzle_index: i64,
    pub completed: bool,
    pub guess_count: u32,
}

impl ResultRecord {
    pub fn solved(puzzle_index: i64, guess_count: u32) -> Self {
        Self { puzzle_index, completed: true, guess_count }
    }

    pub fn failed(puzzle_index: i64) -> Self {
        Self { puzzle_index, completed: false, guess_count: 0 }
    }
}

//! Report formatting.
//!
//! One section per game whose results span more than one puzzle:
//!
//! ```text
//! 🟨⬛🟩 WORDLE 🟨⬛🟩
//!
//! COMPLETIONS (2 days)
//! 1. Alice..3/3 (100%)
//! 2. Bob....2/3 (67%)
//!
//! AVERAGE GUESSES
//! 1. Bob....3.50
//! 2. Alice..4.00
//! ```
//!
//! When every listed participant completed every attempt, completion lines
//! drop the `/attempts (pct%)` suffix.

use crate::{Participant, Recognizer, Tally};
use std::fmt;

/// Rendered leaderboard.
///
/// `text` is the report body. `notices` are diagnostics ("no 'Mini' messages
/// found") meant for stderr, never for the chat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub notices: Vec<String>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

pub(crate) fn missing_notice(recognizer: &Recognizer) -> String {
    format!("no '{}' messages found", recognizer.name())
}

pub(crate) fn section(
    recognizer: &Recognizer,
    participants: &[Participant],
    column: &[&Tally],
    completions: &[usize],
    averages: &[usize],
    width: usize,
) -> String {
    let label = recognizer.display_label();
    let mut lines = vec![
        format!("{label} {} {label}", recognizer.name().to_uppercase()),
        String::new(),
        format!("COMPLETIONS ({} days)", recognizer.range().span()),
    ];

    let all_perfect = completions.iter().all(|&p| column[p].is_perfect());
    for (rank, &p) in completions.iter().enumerate() {
        let name = padded(&participants[p].display_name, width);
        let tally = column[p];
        let line = if all_perfect {
            format!("{}. {name}..{}", rank + 1, tally.completed())
        } else {
            let pct = tally.completed() as f64 * 100.0 / tally.attempts() as f64;
            format!("{}. {name}..{}/{} ({pct:.0}%)", rank + 1, tally.completed(), tally.attempts())
        };
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(format!("AVERAGE {}", recognizer.report_heading()));
    for (rank, &p) in averages.iter().enumerate() {
        let name = padded(&participants[p].display_name, width);
        lines.push(format!("{}. {name}..{:.2}", rank + 1, column[p].average_guesses()));
    }

    lines.join("\n")
}

/// `name` followed by dots up to `width` characters.
fn padded(name: &str, width: usize) -> String {
    format!("{name:.<width$}")
}

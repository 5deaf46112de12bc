//! Wordle: `Wordle 1,024 4/6`, or `X/6` for a miss.

use super::helpers::budget_sighting;
use super::{Game, Sighting};
use crate::Context;
use regex::Captures;

pub fn game() -> Game {
    game! {
        name: "Wordle",
        label: "🟨⬛🟩",
        heading: "GUESSES",
        pattern: r"^Wordle (\d{1,3}(?:,\d{3})+|\d{1,4}) ([1-6X])/6",
        scan: scan,
    }
}

fn scan(caps: &Captures<'_>, _text: &str, _context: &Context) -> Option<Sighting> {
    budget_sighting(caps, 6)
}

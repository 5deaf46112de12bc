//! Nerdle: `nerdlegame 456 3/6`.

use super::helpers::budget_sighting;
use super::{Game, Sighting};
use crate::Context;
use regex::Captures;

pub fn game() -> Game {
    game! {
        name: "Nerdle",
        label: "⬛🟪🟩",
        heading: "GUESSES",
        pattern: r"^nerdlegame (\d{1,4}) ([1-6X])/6",
        scan: scan,
    }
}

fn scan(caps: &Captures<'_>, _text: &str, _context: &Context) -> Option<Sighting> {
    budget_sighting(caps, 6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sight(text: &str) -> Option<Sighting> {
        game().sight(text, &Context::default())
    }

    #[rstest]
    fn misses_are_failures(#[values(1, 10, 30, 200, 800, 1000)] number: i64) {
        assert_eq!(sight(&format!("nerdlegame {number} X/6")), Some(Sighting::failed(number)));
    }

    #[rstest]
    fn guesses_are_scores(#[values(1, 2, 3, 4, 5, 6)] guesses: u32) {
        assert_eq!(sight(&format!("nerdlegame 456 {guesses}/6")), Some(Sighting::solved(456, guesses)));
    }

    #[rstest]
    #[case("nerdlegame ahhaahahahaha")]
    #[case("nerdlegame 12a X/6")]
    #[case("nerdlegame 789 7/6")]
    #[case("nerdlegame 789 0/6")]
    #[case("nerdlegam 789 2/6")]
    #[case("nerdlgame 789 2/6")]
    #[case("nerdlegame 7 2/4")]
    fn rejects_malformed(#[case] text: &str) {
        assert_eq!(sight(text), None);
    }
}

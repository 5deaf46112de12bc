//! Betweenle: `Betweenle 312 - 3/5`. The score is trophies lost, so a `1/5`
//! solve costs four trophies and lower is better.

use super::helpers::{Cell, parse_cell, parse_index};
use super::{Game, Sighting};
use crate::Context;
use regex::Captures;

const TROPHIES: u32 = 5;

pub fn game() -> Game {
    game! {
        name: "Betweenle",
        label: "🟩🏆⬜",
        heading: "TROPHIES LOST",
        pattern: r"^Betweenle (\d{1,4}) - ([1-5X])/5",
        scan: scan,
    }
}

fn scan(caps: &Captures<'_>, _text: &str, _context: &Context) -> Option<Sighting> {
    let index = parse_index(caps.get(1)?.as_str())?;
    match parse_cell(caps.get(2)?.as_str())? {
        Cell::Failed => Some(Sighting::failed(index)),
        Cell::Score(kept) if (1..=TROPHIES).contains(&kept) => Some(Sighting::solved(index, TROPHIES - kept)),
        Cell::Score(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sight(text: &str) -> Option<Sighting> {
        game().sight(text, &Context::default())
    }

    #[rstest]
    #[case("Betweenle 312 - 5/5", 0)]
    #[case("Betweenle 312 - 4/5", 1)]
    #[case("Betweenle 312 - 1/5", 4)]
    fn scores_trophies_lost(#[case] text: &str, #[case] lost: u32) {
        assert_eq!(sight(text), Some(Sighting::solved(312, lost)));
    }

    #[test]
    fn x_is_a_failure() {
        assert_eq!(sight("Betweenle 99 - X/5\n⬜⬜⬜⬜⬜"), Some(Sighting::failed(99)));
    }

    #[rstest]
    #[case("Betweenle 312 - 6/5")]
    #[case("Betweenle 312 - 0/5")]
    #[case("Betweenle 312 3/5")]
    #[case("betweenle 312 - 3/5")]
    fn rejects_malformed(#[case] text: &str) {
        assert_eq!(sight(text), None);
    }
}

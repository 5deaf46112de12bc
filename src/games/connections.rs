//! Connections: a two-line header followed by one line of four coloured
//! squares per guess.
//!
//! ```text
//! Connections           <- line 0
//! Puzzle #123           <- line 1
//! 🟪🟪🟪🟪               <- guesses...
//! 🟪🟦🟪🟪
//! 🟦🟦🟦🟦               <- last grid line: uniform => solved
//! Woohoo!!              <- free-text trailer, skipped
//! ```
//!
//! The score is `line_count - 2 - offset`, where `offset` is the distance of
//! the last grid line from the end of the message. Trailer lines are counted
//! in `line_count` and in `offset`, so they cancel out.

use super::helpers::parse_index;
use super::{Game, Sighting};
use crate::Context;
use regex::Captures;

const HEADER_LINES: usize = 2;
const SQUARES: [char; 4] = ['🟪', '🟦', '🟩', '🟨'];
const ROW_WIDTH: usize = 4;

pub fn game() -> Game {
    game! {
        name: "Connections",
        label: "🟪🟦🟩",
        heading: "GUESSES",
        pattern: r"^Connections \nPuzzle #(\d{1,4})",
        scan: scan,
    }
}

fn scan(caps: &Captures<'_>, text: &str, _context: &Context) -> Option<Sighting> {
    let index = parse_index(caps.get(1)?.as_str())?;

    let lines: Vec<&str> = text.split('\n').collect();
    let Some((offset, row)) = lines.iter().rev().enumerate().find_map(|(i, line)| grid_row(line).map(|row| (i, row)))
    else {
        return Some(Sighting::undecided(index));
    };

    if row.iter().all(|&sq| sq == row[0]) {
        let guesses = lines.len().checked_sub(HEADER_LINES + offset)?;
        Some(Sighting::solved(index, u32::try_from(guesses).ok()?))
    } else {
        Some(Sighting::failed(index))
    }
}

/// The squares of `line` if it is exactly one row of the grid.
fn grid_row(line: &str) -> Option<[char; ROW_WIDTH]> {
    let mut row = [' '; ROW_WIDTH];
    let mut chars = line.trim_end().chars();
    for slot in row.iter_mut() {
        let c = chars.next()?;
        if !SQUARES.contains(&c) {
            return None;
        }
        *slot = c;
    }
    if chars.next().is_some() { None } else { Some(row) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const HEADER: &str = "Connections \nPuzzle #123";

    fn sight(text: &str) -> Option<Sighting> {
        game().sight(text, &Context::default())
    }

    #[rstest]
    #[case("🟪🟪🟪🟪\n🟪🟪🟪🟪\n🟪🟦🟪🟪\n🟪🟪🟪🟪")]
    #[case("🟩🟪🟪🟪\n🟪🟩🟦🟪\n🟪🟪🟦🟪\n🟪🟪🟪🟪")]
    #[case("🟪🟦🟪🟪\n🟪🟪🟩🟪\n🟪🟩🟪🟪\n🟪🟪🟪🟪\nWoohoo!!")]
    #[case("🟪🟪🟪🟪\n🟪🟦🟪🟪\n🟪🟪🟪🟪\n🟪🟪🟪🟪\nSome other text")]
    fn solved_in_four(#[case] grid: &str) {
        assert_eq!(sight(&format!("{HEADER}\n{grid}")), Some(Sighting::solved(123, 4)));
    }

    #[rstest]
    fn puzzle_number(#[values(1, 12, 123, 200, 400, 1234)] number: i64) {
        let text = format!("Connections \nPuzzle #{number}\n🟪🟪🟪🟪\n🟪🟪🟪🟪\n🟪🟦🟪🟪\n🟪🟪🟪🟪");
        assert_eq!(sight(&text), Some(Sighting::solved(number, 4)));
    }

    #[rstest]
    fn guess_count_is_grid_height(#[values(4, 5, 6, 7)] guesses: usize) {
        let text = format!("{HEADER}{}", "\n🟪🟪🟪🟪".repeat(guesses));
        assert_eq!(sight(&text), Some(Sighting::solved(123, guesses as u32)));
    }

    #[test]
    fn mixed_last_row_is_a_failure() {
        let text = "Connections \nPuzzle #456\n🟪🟪🟪🟪\n🟪🟪🟪🟪\n🟪🟪🟪🟪\n🟪🟪🟪🟩";
        assert_eq!(sight(text), Some(Sighting::failed(456)));
    }

    #[test]
    fn several_trailer_lines_are_skipped() {
        let text = format!("{HEADER}\n🟨🟨🟨🟨\n🟦🟦🟦🟦\n\nnice one\n🟩 lucky");
        assert_eq!(sight(&text), Some(Sighting::solved(123, 2)));
    }

    #[test]
    fn trailing_spaces_do_not_break_a_row() {
        let text = format!("{HEADER}\n🟨🟨🟨🟨 \n🟦🟦🟦🟦  ");
        assert_eq!(sight(&text), Some(Sighting::solved(123, 2)));
    }

    #[rstest]
    #[case("🟪🟪🟪")]
    #[case("🟪🟪🟪🟪🟪")]
    #[case("🟪🟪⬛🟪")]
    fn short_long_or_foreign_rows_are_not_grid(#[case] row: &str) {
        assert_eq!(grid_row(row), None);
    }

    #[test]
    fn header_without_grid_has_no_verdict() {
        assert_eq!(sight("Connections \nPuzzle #12a"), Some(Sighting::undecided(12)));
        assert_eq!(sight(HEADER), Some(Sighting::undecided(123)));
    }

    #[rstest]
    #[case("Invalid message format")]
    #[case("Connections \nPuzzle #  12")]
    #[case("Connections \nPuzzle # 12")]
    #[case("Connections \nPuzzle #")]
    #[case("Connections \n")]
    fn rejects_malformed(#[case] text: &str) {
        assert_eq!(sight(text), None);
    }
}

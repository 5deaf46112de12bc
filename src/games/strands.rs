//! Strands: `Strands #45` followed by a grid of circles. Every 💡 is a hint.

use super::helpers::parse_index;
use super::{Game, Sighting};
use crate::Context;
use regex::Captures;

const HINT: char = '💡';

pub fn game() -> Game {
    game! {
        name: "Strands",
        label: "🟡💡🔵",
        heading: "HINTS USED",
        pattern: r"^Strands #(\d{1,4})",
        scan: scan,
    }
}

fn scan(caps: &Captures<'_>, text: &str, _context: &Context) -> Option<Sighting> {
    let index = parse_index(caps.get(1)?.as_str())?;
    let hints = text.chars().filter(|&c| c == HINT).count();
    Some(Sighting::solved(index, u32::try_from(hints).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sight(text: &str) -> Option<Sighting> {
        game().sight(text, &Context::default())
    }

    #[test]
    fn counts_hints_anywhere_in_the_body() {
        let text = "Strands #45\n“Fly me to the moon”\n💡🔵🔵💡\n🔵🟡🔵🔵";
        assert_eq!(sight(text), Some(Sighting::solved(45, 2)));
    }

    #[test]
    fn no_hints_is_a_perfect_score() {
        assert_eq!(sight("Strands #7\n🔵🔵🔵🟡"), Some(Sighting::solved(7, 0)));
    }

    #[test]
    fn rejects_missing_index() {
        assert_eq!(sight("Strands #"), None);
        assert_eq!(sight("Strands 45"), None);
        assert_eq!(sight("I played Strands #45"), None);
    }
}

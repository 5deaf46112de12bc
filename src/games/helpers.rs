use super::Sighting;
use regex::Captures;

/// Remove characters that chat exports sprinkle into message bodies.
///
/// Replacement characters, object placeholders (attachments), zero-width
/// marks and control characters other than `\n` never belong to a result, but
/// they do break start-anchored patterns.
pub fn strip_noise(text: &str) -> String {
    text.chars().filter(|&c| !is_noise(c)).collect()
}

fn is_noise(c: char) -> bool {
    match c {
        '\n' => false,
        '\u{FFFD}' | '\u{FFFC}' | '\u{200B}' | '\u{FEFF}' => true,
        _ => c.is_control(),
    }
}

/// Parse a puzzle number, accepting thousands separators (`1,234`).
pub fn parse_index(s: &str) -> Option<i64> {
    let digits: String = s.chars().filter(|&c| c != ',').collect();
    digits.parse().ok()
}

/// Integer value of capture group `idx`, if it participated in the match.
pub fn group_int<T: std::str::FromStr>(caps: &Captures<'_>, idx: usize) -> Option<T> {
    caps.get(idx)?.as_str().parse().ok()
}

/// Score of an `N/max` cell: `X` is a failure, digits are a score.
pub enum Cell {
    Score(u32),
    Failed,
}

pub fn parse_cell(s: &str) -> Option<Cell> {
    if s == "X" { Some(Cell::Failed) } else { s.parse().ok().map(Cell::Score) }
}

/// Sighting for the common `<index> <cell>/<max>` shape: group 1 is the index,
/// group 2 the cell. Scores outside `1..=max` are rejected.
pub fn budget_sighting(caps: &Captures<'_>, max: u32) -> Option<Sighting> {
    let index = parse_index(caps.get(1)?.as_str())?;
    match parse_cell(caps.get(2)?.as_str())? {
        Cell::Failed => Some(Sighting::failed(index)),
        Cell::Score(score) if (1..=max).contains(&score) => Some(Sighting::solved(index, score)),
        Cell::Score(_) => None,
    }
}

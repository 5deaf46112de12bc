//! NYT Mini crossword. Shares carry a date and a solve time, never a puzzle
//! number, so the index is the number of days between the puzzle date and the
//! reference date.
//!
//! Two share formats:
//!
//! ```text
//! https://www.nytimes.com/badges/games/mini.html?d=2024-02-27&t=41
//! I solved the 2/27/2024 New York Times Mini Crossword in 0:41!
//! ```

use super::helpers::group_int;
use super::{Game, Sighting};
use crate::Context;
use chrono::NaiveDate;
use regex::Captures;

pub fn game() -> Game {
    game! {
        name: "Mini",
        label: "⬜️🔷⬛️",
        heading: "TIME (S)",
        pattern: r"^https://www\.nytimes\.com/badges/games/mini\.html\?d=(\d{4})-(\d{2})-(\d{2})&t=(\d{1,5})|^I solved the (\d{1,2})/(\d{1,2})/(\d{4}) New York Times Mini Crossword in (\d{1,2}):(\d{1,2})!",
        scan: scan,
    }
}

fn scan(caps: &Captures<'_>, _text: &str, context: &Context) -> Option<Sighting> {
    let (date, seconds) = if caps.get(1).is_some() {
        let date = NaiveDate::from_ymd_opt(group_int(caps, 1)?, group_int(caps, 2)?, group_int(caps, 3)?)?;
        (date, group_int::<u32>(caps, 4)?)
    } else {
        let date = NaiveDate::from_ymd_opt(group_int(caps, 7)?, group_int(caps, 5)?, group_int(caps, 6)?)?;
        let minutes: u32 = group_int(caps, 8)?;
        let seconds: u32 = group_int(caps, 9)?;
        (date, minutes * 60 + seconds)
    };

    Some(Sighting::solved(days_before(date, context.reference_date), seconds))
}

fn days_before(date: NaiveDate, reference: NaiveDate) -> i64 {
    reference.signed_duration_since(date).num_days()
}

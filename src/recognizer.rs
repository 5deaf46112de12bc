//! Stateful wrapper around a [`Game`] table.
//!
//! A `Recognizer` is what the engine dispatches messages to. It strips noise,
//! runs the game's pattern and widens its [`ObservedRange`] on every
//! structural match. The range only ever changes inside [`Recognizer::identify`].

use crate::games::{Game, strip_noise};
use crate::{Context, ResultRecord};

/// Smallest and largest puzzle index seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObservedRange {
    bounds: Option<(i64, i64)>,
}

impl ObservedRange {
    /// True until the first index is observed.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// `max - min`, or 0 when nothing was observed.
    pub fn span(&self) -> i64 {
        self.bounds.map_or(0, |(min, max)| max - min)
    }

    pub fn bounds(&self) -> Option<(i64, i64)> {
        self.bounds
    }

    fn widen(&mut self, index: i64) {
        self.bounds = Some(match self.bounds {
            None => (index, index),
            Some((min, max)) => (min.min(index), max.max(index)),
        });
    }
}

#[derive(Debug, Clone)]
pub struct Recognizer {
    game: &'static Game,
    range: ObservedRange,
    context: Context,
}

impl Recognizer {
    pub fn new(game: &'static Game, context: Context) -> Self {
        Self { game, range: ObservedRange::default(), context }
    }

    pub fn name(&self) -> &'static str {
        self.game.name()
    }

    pub fn display_label(&self) -> &'static str {
        self.game.display_label()
    }

    pub fn report_heading(&self) -> &'static str {
        self.game.report_heading()
    }

    pub fn range(&self) -> ObservedRange {
        self.range
    }

    /// Parse one message.
    ///
    /// Returns `None` for anything that is not a result for this game. A
    /// message that names a puzzle but carries no verdict still widens the
    /// range.
    pub fn identify(&mut self, raw: &str) -> Option<ResultRecord> {
        let text = strip_noise(raw);
        let sighting = self.game.sight(&text, &self.context)?;
        self.range.widen(sighting.index);
        sighting.record()
    }
}

/// Compile a regex literal once and hand out a `&'static Regex`.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`Game`](crate::games::Game) table.
///
/// ```text
/// game! {
///     name: "Wordle",
///     label: "🟨⬛🟩",
///     heading: "GUESSES",
///     pattern: r"^Wordle (\d+) ([1-6X])/6",
///     scan: scan,
/// }
/// ```
macro_rules! game {
    (
        name: $name:literal,
        label: $label:literal,
        heading: $heading:literal,
        pattern: $pat:literal,
        scan: $scan:expr
        $(,)?
    ) => {
        $crate::games::Game { name: $name, label: $label, heading: $heading, pattern: regex!($pat), scan: $scan }
    };
}

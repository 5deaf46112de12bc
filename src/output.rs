use chat_summary::{PopulateStats, Report};

/// ANSI styling for stderr, or plain text when disabled.
pub struct Palette {
    enabled: bool,
}

impl Palette {
    const RESET: &'static str = "\x1b[0m";
    const DIM: &'static str = "\x1b[2m";
    const RED: &'static str = "\x1b[31m";
    const GREEN: &'static str = "\x1b[32m";
    const YELLOW: &'static str = "\x1b[33m";

    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn wrap(&self, code: &str, s: impl AsRef<str>) -> String {
        if self.enabled { format!("{code}{}{}", s.as_ref(), Self::RESET) } else { s.as_ref().to_string() }
    }

    fn alarm(&self, s: impl AsRef<str>) -> String {
        self.wrap(Self::RED, s)
    }

    fn good(&self, s: impl AsRef<str>) -> String {
        self.wrap(Self::GREEN, s)
    }

    fn warn(&self, s: impl AsRef<str>) -> String {
        self.wrap(Self::YELLOW, s)
    }

    fn quiet(&self, s: impl AsRef<str>) -> String {
        self.wrap(Self::DIM, s)
    }
}

/// Diagnostics go to stderr so stdout carries only the report.
pub fn print_notices(report: &Report, palette: &Palette) {
    for notice in &report.notices {
        eprintln!("{}", palette.alarm(format!("🟥 {notice} 🟥")));
    }
}

pub fn print_stats(stats: &PopulateStats, palette: &Palette) {
    eprintln!(
        "messages: {} read, {} attributed, {} unknown sender, {} empty",
        stats.messages,
        palette.good(stats.attributed.to_string()),
        palette.warn(stats.unattributed.to_string()),
        palette.quiet(stats.empty.to_string()),
    );
    for (name, hits) in &stats.hits {
        let count = if *hits > 0 { palette.good(hits.to_string()) } else { palette.quiet(hits.to_string()) };
        eprintln!("  {name:<12} {count}");
    }
    eprintln!("{}", palette.quiet(format!("elapsed {:?}", stats.elapsed)));
}

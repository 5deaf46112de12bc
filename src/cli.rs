//! Command-line configuration.
//!
//! Built with clap's builder API because the game flags come from the
//! registry: every game gets `-<initial>` and `--<Name>`.

use chat_summary::games::{self, Game};
use chrono::NaiveDate;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::ffi::OsString;
use std::path::PathBuf;

const DEFAULT_LOCAL_NAME: &str = "Me";

#[derive(Debug)]
pub struct CliConfig {
    pub transcript: PathBuf,
    pub me: String,
    pub games: Vec<&'static Game>,
    pub reference: Option<NaiveDate>,
    pub color: Option<bool>,
    pub stats: bool,
}

pub fn command() -> Command {
    let mut cmd = Command::new("chat-summary")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Leaderboards for the daily puzzle results posted in a group chat.")
        .after_help("With no game flags every game is included.")
        .args_override_self(true)
        .arg(
            Arg::new("transcript")
                .required(true)
                .value_name("TRANSCRIPT")
                .value_parser(value_parser!(PathBuf))
                .help("JSON chat export with participants and messages"),
        )
        .arg(
            Arg::new("me")
                .long("me")
                .value_name("NAME")
                .default_value(DEFAULT_LOCAL_NAME)
                .help("Display name for messages you sent yourself"),
        )
        .arg(
            Arg::new("reference")
                .long("reference")
                .value_name("YYYY-MM-DD")
                .value_parser(parse_reference)
                .help("Date used to number date-based puzzles. Default: today"),
        )
        .arg(Arg::new("color").long("color").action(ArgAction::SetTrue).help("Force ANSI color on stderr"))
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .action(ArgAction::SetTrue)
                .conflicts_with("color")
                .help("Disable ANSI color on stderr"),
        )
        .arg(Arg::new("stats").long("stats").action(ArgAction::SetTrue).help("Print message counts to stderr"));

    for game in games::all() {
        cmd = cmd.arg(
            Arg::new(game.name())
                .short(game.short_flag())
                .long(game.name())
                .action(ArgAction::SetTrue)
                .help(format!("Include the '{}' game in the results", game.name())),
        );
    }
    cmd
}

pub fn parse_from<I, T>(args: I) -> Result<CliConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    Ok(from_matches(&matches))
}

fn from_matches(matches: &ArgMatches) -> CliConfig {
    let mut selected: Vec<&'static Game> = games::all().iter().filter(|g| matches.get_flag(g.name())).collect();
    if selected.is_empty() {
        selected = games::all().iter().collect();
    }

    let color = if matches.get_flag("color") {
        Some(true)
    } else if matches.get_flag("no-color") {
        Some(false)
    } else {
        None
    };

    CliConfig {
        transcript: matches.get_one::<PathBuf>("transcript").cloned().unwrap_or_default(),
        me: matches.get_one::<String>("me").cloned().unwrap_or_else(|| DEFAULT_LOCAL_NAME.to_string()),
        games: selected,
        reference: matches.get_one::<NaiveDate>("reference").copied(),
        color,
        stats: matches.get_flag("stats"),
    }
}

fn parse_reference(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| format!("invalid date '{value}' (expected YYYY-MM-DD)"))
}

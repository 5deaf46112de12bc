mod cli;
mod output;

use chat_summary::{
    ChatSummary, Context, MessageSink, MessageSource, Recognizer, SinkError, SourceError, Transcript, WriterSink,
};
use std::io::{self, IsTerminal};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "chat_summary=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match cli::parse_from(std::env::args_os()) {
        Ok(config) => config,
        Err(err) => err.exit(),
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &cli::CliConfig) -> Result<(), AppError> {
    let context = config.reference.map(|reference_date| Context { reference_date }).unwrap_or_default();

    let mut transcript = Transcript::from_path(&config.transcript)?.with_local_user(config.me.as_str());
    let participants = transcript.participants()?;
    let recognizers = config.games.iter().map(|&game| Recognizer::new(game, context.clone())).collect();

    let mut summary = ChatSummary::new(participants, recognizers);
    let stats = summary.populate(transcript.messages()?);
    let report = summary.render();

    let palette = output::Palette::new(config.color.unwrap_or_else(|| io::stderr().is_terminal()));
    output::print_notices(&report, &palette);
    if config.stats {
        output::print_stats(&stats, &palette);
    }

    if report.is_empty() {
        info!("no results to report");
        return Ok(());
    }
    WriterSink::stdout().deliver(&report.text)?;
    Ok(())
}

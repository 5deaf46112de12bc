//! Message sources and report sinks.
//!
//! The engine only needs participants and a one-shot sequence of messages in,
//! and a string out. This module holds the seams for both directions plus the
//! JSON transcript format the binary reads:
//!
//! ```json
//! {
//!   "participants": [{ "display_name": "Alice", "address": "+61400000000" }],
//!   "messages": [
//!     { "body": "Wordle 456 4/6", "address": "+61400000000" },
//!     { "body": "Wordle 456 3/6", "address": null }
//!   ]
//! }
//! ```
//!
//! A `null` or missing address is a message sent by the local user.

use crate::{Message, Participant};
use serde::Deserialize;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read transcript: {0}")]
    Io(#[from] io::Error),

    #[error("invalid transcript: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("empty report, nothing sent")]
    EmptyReport,

    #[error("could not write report: {0}")]
    Io(#[from] io::Error),
}

/// Where participants and messages come from.
pub trait MessageSource {
    fn participants(&self) -> Result<Vec<Participant>, SourceError>;

    /// Messages in chat order. May be called once.
    fn messages(&mut self) -> Result<Box<dyn Iterator<Item = Message> + '_>, SourceError>;
}

/// Where the rendered report goes.
pub trait MessageSink {
    fn deliver(&mut self, report: &str) -> Result<(), SinkError>;
}

/// A chat export held in memory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Transcript {
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Add the local user (empty address) unless someone already has it.
    pub fn with_local_user(mut self, display_name: impl Into<String>) -> Self {
        if !self.participants.iter().any(|p| p.address.is_empty()) {
            self.participants.push(Participant::local(display_name));
        }
        self
    }
}

impl MessageSource for Transcript {
    fn participants(&self) -> Result<Vec<Participant>, SourceError> {
        Ok(self.participants.clone())
    }

    fn messages(&mut self) -> Result<Box<dyn Iterator<Item = Message> + '_>, SourceError> {
        Ok(Box::new(std::mem::take(&mut self.messages).into_iter()))
    }
}

/// Writes the report, followed by a newline, to any writer.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> MessageSink for WriterSink<W> {
    fn deliver(&mut self, report: &str) -> Result<(), SinkError> {
        if report.is_empty() {
            return Err(SinkError::EmptyReport);
        }
        writeln!(self.writer, "{report}")?;
        self.writer.flush()?;
        Ok(())
    }
}

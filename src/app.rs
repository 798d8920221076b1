use color_eyre::eyre::Result;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::events::{EventKind, HookEvent};
use crate::ingest::claude::classify;
use crate::ingest::parse_payload;
use crate::logfile::LogFile;
use crate::render::{render, timestamp_now};

/// What one invocation did with its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was empty after trimming; nothing written.
    NoData,
    /// Input was not a JSON object; nothing written.
    Malformed(String),
    /// An entry of this kind was appended.
    Logged(EventKind),
}

/// Drives one payload through classify → render → append.
pub struct App {
    pub log: LogFile,
    /// Out-of-band kind from the command line; bypasses classification.
    pub event_override: Option<EventKind>,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            log: LogFile::new(config.log_path()),
            event_override: None,
        }
    }

    pub fn with_event_override(mut self, kind: Option<EventKind>) -> Self {
        self.event_override = kind;
        self
    }

    pub fn process(&self, input: &str) -> Result<Outcome> {
        self.process_at(input, timestamp_now())
    }

    /// Like [`App::process`] with a fixed timestamp.
    ///
    /// Empty and malformed input are reported through the returned
    /// [`Outcome`]; only a failed append is an `Err`.
    pub fn process_at(&self, input: &str, timestamp: String) -> Result<Outcome> {
        let payload = match parse_payload(input) {
            Ok(Some(payload)) => payload,
            Ok(None) => {
                info!("No hook data received");
                return Ok(Outcome::NoData);
            }
            Err(err) => {
                error!("Error parsing hook data: {err}");
                return Ok(Outcome::Malformed(err.to_string()));
            }
        };

        let kind = self.event_override.unwrap_or_else(|| classify(&payload));
        debug!(%kind, fields = payload.len(), overridden = self.event_override.is_some(), "classified hook event");

        let event = HookEvent::new(kind, payload);
        let entry = render(&event, timestamp);
        self.log.append(&entry.body)?;
        debug!(path = %self.log.path().display(), "appended entry");

        Ok(Outcome::Logged(kind))
    }
}

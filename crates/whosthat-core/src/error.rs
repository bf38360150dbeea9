//! Error types for creature sources and quiz rounds.

use thiserror::Error;

/// Errors that can occur when loading creatures from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The endpoint returned a non-success status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A transport-level failure (connection refused, DNS, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The body was not a JSON array of creature records.
    #[error("failed to decode creature list: {0}")]
    Decode(String),

    /// A local file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    /// Returns the HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            SourceError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Decode(e.to_string())
    }
}

/// Errors raised by the round controller and answer evaluator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// Fewer creatures are loaded than a round needs.
    #[error("not enough creatures to display: have {available}, need {required}")]
    NotEnoughCreatures { available: usize, required: usize },

    /// An answer was given before any round started.
    #[error("no round in progress")]
    NoActiveRound,

    /// The current round has already been answered.
    #[error("this round has already been answered")]
    AnswerLocked,
}

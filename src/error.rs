//! Error types shared across the crate.
//!
//! None of these are fatal. Answer errors ask the learner to re-type, storage
//! errors degrade to "no prior sessions", and export errors are reported to
//! the caller of the export.

use thiserror::Error;

/// Returned when a selector key does not name a known mode or operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selector key: {0}")]
pub struct UnknownKey(pub String);

/// The answer text does not fit the active problem type.
///
/// A rejected answer leaves the current problem, timer, stats, and history
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("Please type an answer first.")]
    Empty,
    #[error("Please enter a number.")]
    NotANumber,
    #[error("Format example: 3+7 or 3,7")]
    DecomposeFormat,
}

/// Errors surfaced by session stores.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("session store unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored sessions are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors emitted by CSV export and re-parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ExportError {
    #[error("No attempts in this session yet.")]
    Empty,

    #[error("malformed CSV at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

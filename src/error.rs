//! Error types for circscore.
//!
//! Every variant names the pipeline stage it came from, so a failed run
//! reports where it stopped and on which line or signature.

use std::path::PathBuf;

/// Errors that can occur while decoding, grouping, scoring or filtering.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {source} ({path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("decode: line {line}: expected {expected} tab-separated fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("decode: line {line}: not valid UTF-8")]
    Encoding { line: usize },

    #[error("grouping: line {line}: input begins with a `{feature}` record that has no parent")]
    OrphanChild { line: usize, feature: String },

    #[error("signature: line {line}: {column} `{value}` is not an integer")]
    NonIntegerCoordinate {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error("score join: signature `{0}` not found in score table")]
    MissingSignature(String),

    #[error("score table: line {line}: {message}")]
    ScoreTable { line: u64, message: String },

    #[error("score table: {0}")]
    Csv(#[from] csv::Error),

    #[error("filter: line {line}: score `{value}` is not a number")]
    NonNumericScore { line: usize, value: String },
}

impl Error {
    /// Convenience for wrapping an `io::Error` with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            source: err,
            path: PathBuf::from("<unknown>"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types shared by the codecs, the registry, and the command runtime.

use std::fmt;

use thiserror::Error;

/// Where in an input a parse error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Byte offset from the start of the input (ADI).
    Byte(usize),
    /// One-based line number (Cabrillo, CSV, TSV, ADX).
    Line(usize),
    /// Position not known (JSON, end of input).
    Unknown,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Byte(b) => write!(f, "byte {}", b),
            Position::Line(l) => write!(f, "line {}", l),
            Position::Unknown => write!(f, "unknown position"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input, fatal for that input.
    #[error("{format} parse error at {position}: {message}")]
    Parse {
        format: &'static str,
        position: Position,
        message: String,
    },

    /// Structurally valid input that breaks a format rule (length mismatch,
    /// missing required element).
    #[error("{format} schema error: {message}")]
    Schema {
        format: &'static str,
        message: String,
    },

    /// One or more field values violate their type's contract.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Malformed built-in registry data or codec configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Bad command-line usage (exit status 2).
    #[error("usage error: {0}")]
    Usage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error: {0}")]
    Xml(String),

    /// A value could not be ordered while sorting or filtering.
    #[error(transparent)]
    Compare(#[from] crate::compare::CompareError),
}

impl Error {
    pub(crate) fn parse(format: &'static str, position: Position, message: impl Into<String>) -> Self {
        Error::Parse {
            format,
            position,
            message: message.into(),
        }
    }

    pub(crate) fn schema(format: &'static str, message: impl Into<String>) -> Self {
        Error::Schema {
            format,
            message: message.into(),
        }
    }

    /// Process exit status for this error: 2 for usage errors, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 2,
            _ => 1,
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Error::Xml(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

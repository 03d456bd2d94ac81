// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the Chu space calculator.
//!
//! Every fallible operation reports one of three recoverable failures:
//! malformed text ([`ChuError::Parse`]), out-of-range configuration
//! ([`ChuError::Config`]) or a failed name lookup ([`ChuError::Lookup`]).
//! Broken internal invariants are not errors: they panic.

use std::fmt;
use strum_macros::Display;

/// A header field of the textual matrix encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Field {
    #[strum(to_string = "K")]
    Alphabet,
    #[strum(to_string = "#rows")]
    Rows,
    #[strum(to_string = "#cols")]
    Cols,
}

/// Where in the textual encoding a parse error was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// One of the header fields.
    Header(Field),
    /// A matrix entry; both coordinates are 1-based.
    Entry { row: usize, column: usize },
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Header(field) => write!(f, "{}", field),
            Position::Entry { row, column } => write!(f, "entry ({},{})", row, column),
        }
    }
}

/// Errors reported by the Chu space calculator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChuError {
    /// Malformed textual input.
    #[error("{position}: {message}")]
    Parse { position: Position, message: String },

    /// A size, alphabet or shape is out of range.
    #[error("{0}")]
    Config(String),

    /// Unknown or undefined operator, executable or identifier.
    #[error("{0}")]
    Lookup(String),
}

impl ChuError {
    pub(crate) fn parse(position: Position, message: impl Into<String>) -> Self {
        ChuError::Parse {
            position,
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        ChuError::Config(message.into())
    }

    pub(crate) fn lookup(message: impl Into<String>) -> Self {
        ChuError::Lookup(message.into())
    }
}

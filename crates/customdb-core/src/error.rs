//! Error types for CustomDB.

use crate::query::LexerError;
use std::fmt;

/// The main error type for CustomDB operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The lexer rejected the query text
    Lexer(LexerError),

    /// Input failed validation before reaching the lexer
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lexer(e) => write!(f, "Lexer error: {}", e),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lexer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexerError> for Error {
    fn from(err: LexerError) -> Self {
        Error::Lexer(err)
    }
}

/// A specialized `Result` type for CustomDB operations.
pub type Result<T> = std::result::Result<T, Error>;

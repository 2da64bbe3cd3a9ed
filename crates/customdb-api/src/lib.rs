//! # CustomDB
//!
//! Lexical scanner for the CustomDB SQL dialect: a small fixed keyword
//! set, single-character operators and punctuation, integer literals and
//! upper-cased identifiers.
//!
//! ## Quick Start
//!
//! ```rust
//! use customdb::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("select(a)from(t)where(a=1)");
//!
//! let first = lexer.next_token()?;
//! assert_eq!(first.kind(), TokenKind::Keyword);
//! assert_eq!(first.text(), "SELECT");
//!
//! let rest = lexer.tokenize()?;
//! assert!(rest.last().is_some_and(|t| t.is_end()));
//! # Ok::<(), customdb::LexerError>(())
//! ```
//!
//! ## Whitespace
//!
//! The scanner has no whitespace rule. A space, tab or newline is reported
//! as [`LexerError::UnexpectedCharacter`], and the cursor stays on it:
//!
//! ```rust
//! use customdb::{Lexer, LexerError};
//!
//! let mut lexer = Lexer::new("SELECT A");
//! lexer.next_token()?;
//! assert_eq!(
//!     lexer.next_token(),
//!     Err(LexerError::UnexpectedCharacter { character: ' ', position: 6 })
//! );
//! # Ok::<(), LexerError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod logging;
pub mod security;

// Re-export core types
pub use customdb_core::query::{
    is_digit, is_keyword, is_letter, is_operator, is_punctuation, Lexer, LexerError, Token,
    TokenKind,
};
pub use customdb_core::{Error, Result};

use tracing::{debug, instrument};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validates and tokenizes a complete query.
///
/// The returned vector always ends with the end-of-input token.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for empty or oversized text and
/// [`Error::Lexer`] for the first character the scanner rejects.
///
/// # Examples
///
/// ```rust
/// use customdb::{tokenize, TokenKind};
///
/// let tokens = tokenize("a>=b")?;
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Identifier,
///         TokenKind::Operator,
///         TokenKind::Operator,
///         TokenKind::Identifier,
///         TokenKind::End,
///     ]
/// );
/// # Ok::<(), customdb::Error>(())
/// ```
#[instrument(level = "debug", skip(sql), fields(len = sql.len()))]
pub fn tokenize(sql: &str) -> Result<Vec<Token>> {
    security::validate_query(sql)?;

    let tokens = Lexer::new(sql).tokenize()?;
    debug!(count = tokens.len(), "tokenized query");
    Ok(tokens)
}

//! # CustomDB Core
//!
//! Core types and the SQL lexer for CustomDB.
//!
//! ```rust
//! use customdb_core::query::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("a>=1");
//! let tokens = lexer.tokenize()?;
//! assert_eq!(tokens[0].kind(), TokenKind::Identifier);
//! assert_eq!(tokens[1].text(), ">");
//! assert_eq!(tokens[2].text(), "=");
//! assert!(tokens[4].is_end());
//! # Ok::<(), customdb_core::query::LexerError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod query;

pub use error::{Error, Result};

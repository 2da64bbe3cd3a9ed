//! Query text processing
//!
//! SQL-like query tokenization.

/// Token types
#[allow(missing_docs)]
pub mod token;
/// SQL lexer
#[allow(missing_docs)]
pub mod lexer;

// Re-export main types
pub use lexer::{
    is_digit, is_keyword, is_letter, is_operator, is_punctuation, Lexer, LexerError,
};
pub use token::{Token, TokenKind};

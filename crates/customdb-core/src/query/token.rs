//! Token types produced by the SQL lexer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Literal,
    Operator,
    Punctuation,
    // Reserved; the lexer never produces these two
    Whitespace,
    Comment,
    /// End of input
    End,
}

impl TokenKind {
    /// Upper-case name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Literal => "LITERAL",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Comment => "COMMENT",
            TokenKind::End => "END",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A classified piece of query text.
///
/// Keyword and identifier text is upper-cased; everything else is kept
/// exactly as it appeared in the input. The end-of-input token has
/// empty text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Create a token of the given kind
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-input marker
    pub fn end() -> Self {
        Self::new(TokenKind::End, String::new())
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true for the end-of-input marker
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token{{type={}, value='{}'}}", self.kind, self.text)
    }
}

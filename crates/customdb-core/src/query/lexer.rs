//! Lexer for tokenizing SQL-like queries
//!
//! Converts raw SQL text into a stream of tokens, one per call. Whitespace
//! is not skipped: callers see it as an unexpected character.
//!
//! Letters and digits are classified by Unicode general category: a
//! letter is any `L*` character and a digit is any `Nd` character, so
//! `٣` is a digit while `²` and `Ⅻ` are neither.
use super::token::{Token, TokenKind};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use tracing::trace;
use unicode_general_category::{get_general_category, GeneralCategory};

static KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "SELECT", "FROM", "WHERE", "AND", "OR", "NOT", "INSERT", "INTO", "VALUES", "UPDATE", "SET",
        "DELETE",
    ]
    .into_iter()
    .collect()
});

static OPERATORS: LazyLock<HashSet<char>> =
    LazyLock::new(|| ['=', '>', '<', '+', '-', '*', '/', '%', '!'].into_iter().collect());

/// Returns true if `word` (already upper-cased) is a reserved keyword
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

/// Returns true if `ch` is in one of the letter categories (Lu, Ll, Lt, Lm, Lo)
pub fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Returns true if `ch` is a decimal digit (Nd) in any script
pub fn is_digit(ch: char) -> bool {
    matches!(get_general_category(ch), GeneralCategory::DecimalNumber)
}

/// Returns true if `ch` is a single-character operator
pub fn is_operator(ch: char) -> bool {
    OPERATORS.contains(&ch)
}

/// Returns true if `ch` is a punctuation character
pub fn is_punctuation(ch: char) -> bool {
    matches!(ch, ',' | ';' | '(' | ')')
}

/// Lexer state
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer from input string
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Current cursor offset, in characters
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the next token
    ///
    /// Once the input is exhausted every call returns the end token. On
    /// failure the offending character is left unconsumed.
    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        if self.is_at_end() {
            return Ok(Token::end());
        }

        let ch = self.current_char();

        let token = if is_letter(ch) {
            self.read_word()
        } else if is_digit(ch) {
            self.read_number()
        } else if is_operator(ch) {
            self.advance();
            Token::new(TokenKind::Operator, ch)
        } else if is_punctuation(ch) {
            self.advance();
            Token::new(TokenKind::Punctuation, ch)
        } else {
            trace!(character = ?ch, position = self.position, "unexpected character");
            return Err(LexerError::UnexpectedCharacter {
                character: ch,
                position: self.position,
            });
        };

        trace!(kind = %token.kind(), text = token.text(), "token");
        Ok(token)
    }

    /// Tokenize entire input into vector of tokens, ending with the end token
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.is_end() {
                tokens.push(token);
                break;
            }
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_char(&self) -> char {
        self.input[self.position]
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while !self.is_at_end() && pred(self.current_char()) {
            self.advance();
        }
        self.input[start..self.position].iter().collect()
    }

    fn read_word(&mut self) -> Token {
        let word = self
            .consume_while(|c| is_letter(c) || is_digit(c) || c == '_')
            .to_uppercase();

        if is_keyword(&word) {
            Token::new(TokenKind::Keyword, word)
        } else {
            Token::new(TokenKind::Identifier, word)
        }
    }

    fn read_number(&mut self) -> Token {
        let digits = self.consume_while(is_digit);
        Token::new(TokenKind::Literal, digits)
    }
}

/// Lexer errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    UnexpectedCharacter { character: char, position: usize },
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexerError::UnexpectedCharacter {
                character,
                position,
            } => write!(
                f,
                "Unexpected character: '{}' at position {}",
                character, position
            ),
        }
    }
}

impl std::error::Error for LexerError {}

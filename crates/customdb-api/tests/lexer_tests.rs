use customdb::{tokenize, Error, Lexer, LexerError, Token, TokenKind};

fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind(), t.text())).collect()
}

#[test]
fn test_letter_only_words() {
    let cases = [
        ("select", TokenKind::Keyword, "SELECT"),
        ("From", TokenKind::Keyword, "FROM"),
        ("values", TokenKind::Keyword, "VALUES"),
        ("users", TokenKind::Identifier, "USERS"),
        ("Order", TokenKind::Identifier, "ORDER"),
        ("x", TokenKind::Identifier, "X"),
    ];

    for (input, kind, text) in cases {
        let tokens = Lexer::new(input).tokenize().unwrap();
        assert_eq!(pairs(&tokens), vec![(kind, text), (TokenKind::End, "")], "{input}");
    }
}

#[test]
fn test_digit_only_inputs() {
    for input in ["0", "42", "0001", "18446744073709551616000"] {
        let tokens = Lexer::new(input).tokenize().unwrap();
        assert_eq!(
            pairs(&tokens),
            vec![(TokenKind::Literal, input), (TokenKind::End, "")]
        );
    }
}

#[test]
fn test_insert_statement_without_spaces() {
    let tokens = tokenize("insert(into)t(a,b)values(1,2);").unwrap();
    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::Keyword, "INSERT"),
            (TokenKind::Punctuation, "("),
            (TokenKind::Keyword, "INTO"),
            (TokenKind::Punctuation, ")"),
            (TokenKind::Identifier, "T"),
            (TokenKind::Punctuation, "("),
            (TokenKind::Identifier, "A"),
            (TokenKind::Punctuation, ","),
            (TokenKind::Identifier, "B"),
            (TokenKind::Punctuation, ")"),
            (TokenKind::Keyword, "VALUES"),
            (TokenKind::Punctuation, "("),
            (TokenKind::Literal, "1"),
            (TokenKind::Punctuation, ","),
            (TokenKind::Literal, "2"),
            (TokenKind::Punctuation, ")"),
            (TokenKind::Punctuation, ";"),
            (TokenKind::End, ""),
        ]
    );
}

#[test]
fn test_update_with_arithmetic() {
    let tokens = tokenize("UPDATE(t)SET(n=n*2%7-1)WHERE(NOT(n!=0))").unwrap();
    let operators: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind() == TokenKind::Operator)
        .map(Token::text)
        .collect();
    assert_eq!(operators, vec!["=", "*", "%", "-", "!", "="]);
}

#[test]
fn test_realistic_query_fails_on_first_space() {
    let mut lexer = Lexer::new("SELECT name FROM users");
    assert_eq!(lexer.next_token().unwrap().text(), "SELECT");
    assert_eq!(
        lexer.next_token().unwrap_err(),
        LexerError::UnexpectedCharacter {
            character: ' ',
            position: 6
        }
    );

    let err = tokenize("SELECT name FROM users").unwrap_err();
    assert!(matches!(
        err,
        Error::Lexer(LexerError::UnexpectedCharacter {
            character: ' ',
            position: 6
        })
    ));
}

#[test]
fn test_unsupported_characters() {
    for (input, character, position) in [
        ("a='x'", '\'', 2),
        ("a.b", '.', 1),
        ("1.5", '.', 1),
        ("@p", '@', 0),
    ] {
        assert_eq!(
            Lexer::new(input).tokenize().unwrap_err(),
            LexerError::UnexpectedCharacter {
                character,
                position
            },
            "{input}"
        );
    }
}

#[test]
fn test_double_minus_is_two_operators() {
    let tokens = Lexer::new("t--c").tokenize().unwrap();
    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::Identifier, "T"),
            (TokenKind::Operator, "-"),
            (TokenKind::Operator, "-"),
            (TokenKind::Identifier, "C"),
            (TokenKind::End, ""),
        ]
    );
}

#[test]
fn test_non_end_tokens_are_non_empty() {
    let tokens = tokenize("DELETE(FROM)t(WHERE)id=10;").unwrap();
    let (last, rest) = tokens.split_last().unwrap();
    assert!(last.is_end());
    assert!(rest.iter().all(|t| !t.text().is_empty() && !t.is_end()));
}

#[test]
fn test_exhausted_lexer_keeps_returning_end() {
    let mut lexer = Lexer::new("a;");
    let _ = lexer.tokenize().unwrap();
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap(), Token::end());
    }
}

#[test]
fn test_scripts_follow_unicode_categories() {
    let tokens = tokenize("\u{3c4}\u{3b9}\u{3bc}\u{3ae}=\u{663}\u{664}").unwrap();
    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::Identifier, "\u{3a4}\u{399}\u{39c}\u{389}"),
            (TokenKind::Operator, "="),
            (TokenKind::Literal, "\u{663}\u{664}"),
            (TokenKind::End, ""),
        ]
    );

    assert_eq!(
        tokenize("x\u{b2}").unwrap_err(),
        Error::Lexer(LexerError::UnexpectedCharacter {
            character: '\u{b2}',
            position: 1
        })
    );
}

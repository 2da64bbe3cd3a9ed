#![no_main]

use customdb_core::query::{Lexer, LexerError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string (ignore invalid UTF-8)
    let Ok(sql) = std::str::from_utf8(data) else {
        return;
    };

    // Limit query length to prevent timeout
    if sql.len() > 10_000 {
        return;
    }

    let char_count = sql.chars().count();
    let mut lexer = Lexer::new(sql);
    loop {
        let before = lexer.position();
        match lexer.next_token() {
            Ok(token) if token.is_end() => {
                assert!(token.text().is_empty());
                assert_eq!(lexer.position(), char_count);
                assert!(lexer.next_token().is_ok_and(|t| t.is_end()));
                break;
            }
            Ok(token) => {
                assert!(!token.text().is_empty());
                assert!(lexer.position() > before);
            }
            Err(LexerError::UnexpectedCharacter { position, .. }) => {
                assert_eq!(position, before);
                assert_eq!(lexer.position(), before);
                break;
            }
        }
    }

    // The validated entry point must never panic either
    let _ = customdb::tokenize(sql);
});

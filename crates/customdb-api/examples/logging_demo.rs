use customdb::logging::LogConfig;
use customdb::{Lexer, TokenKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Trace level shows one event per token
    let _guard = LogConfig::trace().init();

    println!("=== CustomDB Lexer Demo ===\n");

    println!("1. Tokenizing a query written without spaces...");
    for token in customdb::tokenize("SELECT(name)FROM(users)WHERE(age>=18);")? {
        println!("   {}", token);
    }

    println!("\n2. Pulling tokens one at a time...");
    let mut lexer = Lexer::new("update(t)set(n=n+1)");
    loop {
        let token = lexer.next_token()?;
        if token.kind() == TokenKind::End {
            break;
        }
        println!("   {:<12} {}", token.kind(), token.text());
    }

    println!("\n3. Whitespace is rejected...");
    match customdb::tokenize("SELECT name FROM users") {
        Ok(tokens) => println!("   unexpectedly got {} tokens", tokens.len()),
        Err(e) => println!("   {}", e),
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}

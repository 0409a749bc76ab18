use gomi::{LexError, Scanner, Token, TokenKind};
use owo_colors::OwoColorize;
use tracing::debug;

/// Scan `source` and print every token as soon as it is read, up to end of input.
/// Tokens printed before an error stay printed.
pub fn print_tokens(source: &str, json: bool) -> Result<(), LexError> {
    let mut scanner = Scanner::new(source);
    let mut count = 0usize;
    loop {
        let token = scanner.read_token()?;
        print_token(&token, json);
        count += 1;
        if token.kind == TokenKind::EndOfInput {
            debug!(tokens = count, "scan finished");
            return Ok(());
        }
    }
}

fn print_token(token: &Token, json: bool) {
    if !json {
        println!("{}", token.to_string().bright_yellow());
        return;
    }
    match serde_json::to_string(token) {
        Ok(line) => println!("{line}"),
        Err(err) => eprintln!("{} {err}", "json error:".red().bold()),
    }
}

pub fn format_lex_error(origin: &str, err: &LexError) -> String {
    format!(
        "{} {} at {}:{}:{}: {}",
        "lex".red().bold(),
        err.kind.yellow(),
        origin.cyan(),
        err.line,
        err.column,
        err.message.bright_red()
    )
}

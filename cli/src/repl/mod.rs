mod completer;
mod helper;
mod highlighter;

use gomi::errors::GomiError;
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::{Config, EditMode, Editor};
use std::fs;

use self::helper::ReplHelper;
use crate::output;

pub fn run() -> Result<(), GomiError> {
    let config = Config::builder()
        .history_ignore_dups(true)
        .map_err(to_shell_error)?
        .completion_type(rustyline::CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();

    let mut rl: Editor<ReplHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(config).map_err(to_shell_error)?;
    rl.set_helper(Some(ReplHelper));

    println!(
        "{} {}",
        "ゴミ箱へようこそ".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "Type .help for shell commands".bright_black());

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == ".exit" || trimmed == "exit" {
                    break;
                }

                let _ = rl.add_history_entry(trimmed);
                if handle_command(trimmed) {
                    continue;
                }
                scan_snippet("<repl>", &line);
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "^C".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{} {err}", "shell error:".red().bold());
                break;
            }
        }
    }

    println!("{}", "さようなら".bright_black());
    Ok(())
}

fn handle_command(trimmed: &str) -> bool {
    if trimmed == ".help" {
        println!("{}", ".help                show commands".bright_blue());
        println!("{}", ".load <file>         scan a source file".bright_blue());
        println!("{}", ".exit                leave the shell".bright_blue());
        return true;
    }
    if let Some(path) = trimmed.strip_prefix(".load ") {
        let path = path.trim();
        match fs::read_to_string(path) {
            Ok(source) => scan_snippet(path, &source),
            Err(err) => eprintln!("{} {err}", "load error:".red().bold()),
        }
        return true;
    }
    false
}

fn scan_snippet(origin: &str, source: &str) {
    if let Err(err) = output::print_tokens(source, false) {
        eprintln!("{}", output::format_lex_error(origin, &err));
    }
}

fn to_shell_error(err: ReadlineError) -> GomiError {
    GomiError::Shell {
        message: format!("failed to initialize shell: {err}"),
    }
}

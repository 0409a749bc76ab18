use std::fs;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;

mod logging;
mod output;
mod repl;

/// Bilingual sample scanned by `--demo`.
const DEMO_SOURCE: &str = "
# gomi demo
モジュール 例
import 'io'

宣言 名前 ＝ ”ゴミ箱”
let count = 10
定数 比率 ＝ ３．１４

func add(a, b) { a + b }
関数 足す（甲、乙）｛ 甲 ＋ 乙 ｝

もし count >= 5 && 本当 ｛ count = count - 1 ｝
while !無 { [1, 2.5]; }
";

#[derive(Parser)]
#[command(
    name = "gomi",
    about = "Token scanner for the bilingual gomi language"
)]
struct Cli {
    /// Path to a source file to scan
    file: Option<String>,
    /// Scan inline source
    #[arg(long)]
    eval: Option<String>,
    /// Scan the built-in bilingual sample
    #[arg(long)]
    demo: bool,
    /// Print tokens as JSON lines
    #[arg(long)]
    json: bool,
    /// Log scanner activity to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Print version and exit
    #[arg(long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.version {
        println!(
            "{} {}",
            "gomi".bright_cyan().bold(),
            env!("CARGO_PKG_VERSION").bright_black()
        );
        return;
    }

    let (source, origin) = if cli.demo {
        (DEMO_SOURCE.to_owned(), "<demo>".to_owned())
    } else if let Some(code) = cli.eval {
        (code, "<eval>".to_owned())
    } else if let Some(file) = cli.file {
        match fs::read_to_string(&file) {
            Ok(s) => (s, file),
            Err(e) => {
                eprintln!(
                    "{} could not read '{}': {e}",
                    "error:".red().bold(),
                    file.yellow()
                );
                process::exit(1);
            }
        }
    } else {
        if let Err(err) = repl::run() {
            eprintln!("{} {err:?}", "error:".red().bold());
            process::exit(1);
        }
        return;
    };

    if let Err(err) = output::print_tokens(&source, cli.json) {
        eprintln!("{}", output::format_lex_error(&origin, &err));
        process::exit(1);
    }
}

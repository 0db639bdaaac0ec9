//! SRPN Calculator CLI

use clap::{Parser, Subcommand};
use srpn::Fatal;
use srpn::repl::{Repl, run_lines};
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "srpn", version, about = "SRPN - saturating reverse Polish notation calculator")]
struct Cli {
    /// Do not load or save the line-editor history
    #[arg(long, global = true)]
    no_history: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session (default)
    Repl,
    /// Evaluate every line of a script file
    Run {
        /// Script to evaluate
        file: PathBuf,
    },
    /// Dump the lexer tokens of a word as JSON (debug)
    Tokens {
        /// Word to tokenize
        #[arg(allow_hyphen_values = true)]
        word: String,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("SRPN_LOG", "warn")).init();
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => repl(cli.no_history),
        Command::Run { file } => run_file(&file),
        Command::Tokens { word } => tokenize_word(&word),
    };

    match result {
        Ok(Some(fatal)) => {
            eprintln!("{}", fatal.exit_message());
            std::process::exit(fatal.exit_code());
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn repl(no_history: bool) -> srpn::Result<Option<Fatal>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        Repl::new(!no_history)?.run()
    } else {
        log::debug!("stdin is not a terminal, reading plain lines");
        run_lines(stdin.lock(), &mut io::stdout().lock())
    }
}

fn run_file(path: &PathBuf) -> srpn::Result<Option<Fatal>> {
    let file = std::fs::File::open(path)?;
    log::info!("running {}", path.display());
    run_lines(BufReader::new(file), &mut io::stdout().lock())
}

fn tokenize_word(word: &str) -> srpn::Result<Option<Fatal>> {
    let lexemes = srpn::lexer::tokenize(word);
    println!("{}", serde_json::to_string_pretty(&lexemes)?);
    Ok(None)
}

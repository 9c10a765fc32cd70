use clap::{Parser, Subcommand};
use std::path::Path;
use toypascal_lexer::{LexerError, Scanner, Token, TokenKind};

#[derive(Parser)]
#[command(name = "tpc")]
#[command(about = "Toy Pascal compiler front end")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token stream of a source file
    Tokens {
        /// Input source file
        path: String,
    },

    /// Check a source file for illegal characters
    Check {
        /// Input source file
        path: String,
    },
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Tokens { path } => cmd_tokens(&path),
        Command::Check { path } => cmd_check(&path),
    }
}

/// Enable log output on stderr when `RUST_LOG` is set,
/// e.g. `RUST_LOG=toypascal_lexer=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match load_source(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

/// Read a source file as bytes. Invalid UTF-8 sequences become U+FFFD,
/// which the scanner reports as illegal characters.
fn load_source(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn cmd_tokens(path: &str) {
    let source = read_source(path);
    let tokens = Scanner::tokenize(&source);
    tracing::debug!(path, count = tokens.len(), "tokenized");
    print!("{}", format_tokens(&tokens));
}

fn cmd_check(path: &str) {
    let source = read_source(path);
    let errors = illegal_characters(&Scanner::tokenize(&source));
    tracing::debug!(path, errors = errors.len(), "checked");

    if errors.is_empty() {
        eprintln!("OK: {path}");
        return;
    }
    for e in &errors {
        eprintln!("{e}");
    }
    std::process::exit(1);
}

/// One line per token: `LINE:COLUMN<TAB>KIND<TAB>"TEXT"`.
fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}:{}\t{}\t{:?}\n", t.line, t.column, t.kind, t.text))
        .collect()
}

fn illegal_characters(tokens: &[Token]) -> Vec<LexerError> {
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Illegal)
        .map(LexerError::from_token)
        .collect()
}

//! CLI tool to tokenize and evaluate arithmetic expressions.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lexcalc::{Token, TokenKind};

#[derive(Parser)]
#[command(name = "lexcalc", version, about = "Tokenize and evaluate arithmetic expressions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the token table for a file, an expression, or stdin
    Tokens {
        /// Source file (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Tokenize this text instead of a file
        #[arg(short, long, conflicts_with = "file")]
        expr: Option<String>,
    },
    /// Evaluate one or more expressions
    Eval {
        #[arg(required = true)]
        exprs: Vec<String>,
        /// Also print the token table of each expression
        #[arg(long)]
        tokens: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Command::Tokens { file, expr } => run_tokens(file, expr),
        Command::Eval { exprs, tokens } => run_eval(&exprs, tokens),
    }
}

fn run_tokens(file: Option<PathBuf>, expr: Option<String>) -> ExitCode {
    let (label, source) = match (file, expr) {
        (_, Some(expr)) => ("<expr>".to_string(), expr),
        (Some(path), None) => match fs::read_to_string(&path) {
            Ok(c) => (path.display().to_string(), c),
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        (None, None) => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("<stdin>: {e}");
                return ExitCode::FAILURE;
            }
            ("<stdin>".to_string(), buf)
        }
    };

    let scan = lexcalc::tokenize_timed(&source);
    print_tokens(&scan.value);
    eprintln!(
        "{label}: {} token(s) in {:.4} ms",
        scan.value.len() - 1,
        scan.elapsed_ms()
    );
    ExitCode::SUCCESS
}

fn run_eval(exprs: &[String], show_tokens: bool) -> ExitCode {
    let mut had_error = false;

    for expr in exprs {
        match lexcalc::calculate(expr) {
            Ok(calc) => {
                if show_tokens {
                    print_tokens(&calc.tokens);
                }
                println!("{expr} = {}", calc.value);
                eprintln!(
                    "{expr}: tokenize {:.4} ms, evaluate {:.4} ms, total {:.4} ms",
                    calc.scan_time.as_secs_f64() * 1000.0,
                    calc.eval_time.as_secs_f64() * 1000.0,
                    calc.total_ms()
                );
            }
            Err(e) => {
                eprintln!("{expr}: {e}");
                had_error = true;
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn print_tokens(tokens: &[Token]) {
    println!("{:<12} {:<16} {:>5} {:>6}", "KIND", "TEXT", "LINE", "COLUMN");
    for token in tokens.iter().filter(|t| t.kind != TokenKind::EndOfInput) {
        println!(
            "{:<12} {:<16} {:>5} {:>6}",
            token.kind.name(),
            token.text,
            token.span.line,
            token.span.column
        );
    }
}

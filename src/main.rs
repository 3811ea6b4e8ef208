use std::{io, process::ExitCode};

use clap::Parser;
use intcalc::{
    config::{Config, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_LEN},
    evaluate,
    interpreter::lexer::Scanner,
    parse_with,
};
use tracing_subscriber::EnvFilter;

/// intcalc evaluates one line of integer arithmetic made of `+ - * /`,
/// parentheses and non-negative integer literals.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate. When omitted, one line is read from
    /// standard input.
    expression: Option<String>,

    /// Prints the parsed tree in infix notation before the result.
    #[arg(short, long)]
    tree: bool,

    /// Prints the token stream instead of evaluating the expression.
    #[arg(long)]
    tokens: bool,

    /// Rejects input lines longer than this many bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_LEN, conflicts_with = "no_limit")]
    max_len: usize,

    /// Accepts input lines of any length.
    #[arg(long)]
    no_limit: bool,

    /// Rejects expressions that nest parentheses or chain operators deeper
    /// than this.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Args {
    fn config(&self) -> Config {
        Config { max_input_len: if self.no_limit { None } else { Some(self.max_len) },
                 max_depth:     self.max_depth, }
    }
}

fn main() -> ExitCode {
    let mut args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::trace!("CLI args = {:?}", args);

    let source = match args.expression.take() {
        Some(expression) => expression,
        None => {
            let mut line = String::new();
            if let Err(e) = io::stdin().read_line(&mut line) {
                eprintln!("Failed to read a line from standard input: {e}");
                return ExitCode::FAILURE;
            }
            line
        },
    };

    match run(&args, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args, source: &str) -> Result<(), intcalc::error::Error> {
    let config = args.config();
    if args.tokens {
        config.check_input_len(source)?;
        for token in Scanner::tokenize(source)? {
            println!("{token:?}");
        }
        return Ok(());
    }

    let expr = parse_with(source, &config)?;
    if args.tree {
        println!("Tree: {expr}");
    }
    println!("Result: {}", evaluate(&expr)?);
    Ok(())
}

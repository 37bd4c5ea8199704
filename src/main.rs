//! Charstate CLI - classify strings against the built-in grammars.

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result};
use charstate::Grammar;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Classify whole strings with deterministic character automata.
#[derive(Parser, Debug)]
#[command(name = "charstate", author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify each input, printing `accept` or `reject`.
    ///
    /// Exits with status 1 if any input is rejected. Pass `-` as the only
    /// input to read one candidate per line from stdin.
    Check {
        /// Grammar name (binary, integer, float, email, password).
        grammar: Grammar,

        /// Candidate strings.
        #[arg(required = true, allow_hyphen_values = true)]
        inputs: Vec<String>,
    },

    /// Print the per-character trace of one input as JSON.
    Trace {
        /// Grammar name (binary, integer, float, email, password).
        grammar: Grammar,

        /// Candidate string.
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// List the available grammars.
    Grammars,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        LevelFilter::ERROR
    } else if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Check { grammar, inputs } => check(grammar, inputs),
        Commands::Trace { grammar, input } => {
            let json = grammar.trace(&input).to_json()?;
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Grammars => {
            for grammar in Grammar::ALL {
                println!("{grammar}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn check(grammar: Grammar, inputs: Vec<String>) -> Result<ExitCode> {
    let inputs = if inputs.len() == 1 && inputs[0] == "-" {
        read_stdin_lines()?
    } else {
        inputs
    };
    debug!(%grammar, count = inputs.len(), "checking inputs");

    let mut all_accepted = true;
    for input in &inputs {
        let accepted = grammar.classify(input);
        all_accepted &= accepted;
        println!("{input}\t{}", if accepted { "accept" } else { "reject" });
    }

    Ok(if all_accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("failed to read inputs from stdin")
}

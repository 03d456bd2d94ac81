// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end for the Chu space calculator.

use anyhow::Context as _;
use chu_calc::{BinaryOperator, Calculator, ChuError, ChuSpace, Executable, UnaryOperator};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Alphabet size of the constants `1` and `_|_`.
    #[arg(long, env = "CHU_K", default_value_t = 2, allow_negative_numbers = true)]
    k: i64,

    /// Keep repeated rows and columns instead of standardizing results.
    #[arg(long)]
    multi: bool,

    #[command(flatten)]
    header: HeaderArgs,

    #[command(subcommand)]
    command: Command,
}

/// Header overrides for spaces read from files. Inferred when absent.
#[derive(Args, Debug)]
struct HeaderArgs {
    /// Alphabet size K.
    #[arg(long, global = true)]
    alphabet: Option<String>,

    /// Number of rows.
    #[arg(long, global = true)]
    rows: Option<String>,

    /// Number of columns.
    #[arg(long, global = true)]
    cols: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a space.
    Show {
        /// Calculator identifier or file in the textual encoding.
        space: String,
    },
    /// Apply a unary operator.
    Unary {
        op: String,
        space: String,
    },
    /// Apply a binary operator.
    Binary {
        left: String,
        #[arg(allow_hyphen_values = true)]
        op: String,
        right: String,
    },
    /// List operator and executable symbols.
    Operators,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut calc = Calculator::new();
    calc.set_k(cli.k)?;
    calc.set_standardization(!cli.multi);

    match &cli.command {
        Command::Show { space } => {
            print!("{}", resolve(&calc, &cli.header, space)?);
        }
        Command::Unary { op, space } => {
            let op = UnaryOperator::lookup(op)?;
            let arg = resolve(&calc, &cli.header, space)?;
            print!("{}", calc.apply_unary(op, &arg));
        }
        Command::Binary { left, op, right } => {
            let op = BinaryOperator::lookup(op)?;
            let left = resolve(&calc, &cli.header, left)?;
            let right = resolve(&calc, &cli.header, right)?;
            print!("{}", calc.apply_binary(op, &left, &right));
        }
        Command::Operators => {
            let unary: Vec<String> = UnaryOperator::iter().map(|op| op.to_string()).collect();
            let binary: Vec<String> = BinaryOperator::iter().map(|op| op.to_string()).collect();
            let executables: Vec<String> = Executable::iter().map(|e| e.to_string()).collect();
            println!("unary: {}", unary.join(" "));
            println!("binary: {}", binary.join(" "));
            println!("executables: {}", executables.join(" "));
        }
    }
    Ok(())
}

/// Resolve a space argument: a calculator identifier, or failing that a
/// file in the textual encoding.
fn resolve(calc: &Calculator, header: &HeaderArgs, name: &str) -> anyhow::Result<ChuSpace> {
    match calc.evaluate(name) {
        Err(ChuError::Lookup(_)) if Path::new(name).is_file() => {
            let text = fs::read_to_string(name).with_context(|| format!("reading {}", name))?;
            let space = ChuSpace::parse(
                header.alphabet.as_deref(),
                header.rows.as_deref(),
                header.cols.as_deref(),
                &text,
            )
            .with_context(|| format!("parsing {}", name))?;
            info!(
                path = name,
                k = space.k(),
                rows = space.nrows(),
                cols = space.ncols(),
                "read space from file"
            );
            Ok(space.conform(&calc.context()))
        }
        result => Ok(result?),
    }
}

//! bigdet CLI
//!
//! - `bigdet det <FILE>`: sign, log-magnitude and a decimal approximation of
//!   the determinant of the square matrix in a delimited text file.
//! - `bigdet random <N>`: write an `N x N` uniform random matrix as CSV.
//!
//! Exit code 0 on success (a singular matrix is a success), 1 on any error.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use bigdet::csv::{write_matrix, DEFAULT_DELIMITER};
use bigdet::random::try_uniform_matrix;
use bigdet::reconstruct::Precision;
use bigdet::report::{self, DetConfig, DEFAULT_DISPLAY_DIGITS};

/// Log-domain determinants of large matrices
#[derive(Parser)]
#[command(name = "bigdet")]
#[command(version)]
#[command(about = "Log-domain determinants of large matrices with arbitrary-precision display")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute sign(det), log|det| and an approximate determinant
    Det(DetArgs),
    /// Print an N x N matrix of uniform [0, 1) reals as CSV
    Random(RandomArgs),
}

#[derive(clap::Args)]
struct DetArgs {
    /// Matrix file, one row per line
    file: PathBuf,

    /// Significant digits of the decimal reconstruction
    #[arg(short, long, env = "BIGDET_PRECISION", default_value_t = Precision::default())]
    precision: Precision,

    /// Digits after the point in the printed determinant
    #[arg(short, long, env = "BIGDET_DIGITS", default_value_t = DEFAULT_DISPLAY_DIGITS)]
    digits: usize,

    /// Field delimiter
    #[arg(long, env = "BIGDET_DELIMITER", default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// Relative pivot tolerance below which the matrix counts as singular
    #[arg(long, default_value_t = 0.0)]
    tolerance: f64,
}

#[derive(clap::Args)]
struct RandomArgs {
    /// Matrix dimension
    #[arg(allow_hyphen_values = true)]
    n: i64,

    /// Seed for a reproducible matrix
    #[arg(long)]
    seed: Option<u64>,

    /// Field delimiter
    #[arg(long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(io::stderr)
        .init();

    let result = match cli.command {
        Commands::Det(args) => handle_det(args),
        Commands::Random(args) => handle_random(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_det(args: DetArgs) -> Result<()> {
    let config = DetConfig {
        precision: args.precision,
        display_digits: args.digits,
        delimiter: args.delimiter,
        tolerance: args.tolerance,
    };

    println!("Reading matrix from {} ...", args.file.display());
    let mut report = report::run(&args.file, &config)
        .with_context(|| format!("cannot evaluate determinant of {}", args.file.display()))?;

    // Source line already printed before the (possibly slow) read.
    report.source = None;
    println!("{report}");
    Ok(())
}

fn handle_random(args: RandomArgs) -> Result<()> {
    let m = try_uniform_matrix(args.n, args.seed)?;
    eprintln!("Created random {0} x {0} matrix", m.nrows());

    let mut out = io::stdout().lock();
    out.write_all(write_matrix(&m, args.delimiter).as_bytes())
        .context("cannot write matrix to stdout")?;
    out.flush().context("cannot write matrix to stdout")?;
    Ok(())
}

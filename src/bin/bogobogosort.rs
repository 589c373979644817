//! Bogobogosort command-line runner.
//!
//! Sorts a list of integers and prints the result with the elapsed time.

use std::io::IsTerminal;
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bogobogosort::{
    BogoError, BogoResult, Bogobogosort, Permuter, SeededPermuter, SortLimits, SortReport,
    ThreadRngPermuter,
};

/// Input sorted when no values are given.
const REFERENCE_INPUT: [i64; 5] = [5, 4, 3, 2, 1];

const EXIT_SUCCESS: u8 = 0;

/// Invalid arguments or limits.
const EXIT_FAILURE: u8 = 1;

/// Exit code for an exhausted shuffle or time budget. Distinct from argument errors.
const EXIT_BUDGET_EXCEEDED: u8 = 2;

#[derive(Parser)]
#[command(
    name = "bogobogosort",
    about = "Sort integers with bogobogosort (do not pass more than five)",
    version
)]
struct Cli {
    /// Values to sort [default: 5 4 3 2 1]
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Seed for a reproducible shuffle stream
    #[arg(long)]
    seed: Option<u64>,

    /// Give up after this many shuffles
    #[arg(long)]
    max_shuffles: Option<u64>,

    /// Give up after this many milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print a JSON report instead of plain text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn limits(&self) -> SortLimits {
        SortLimits {
            max_shuffles: self.max_shuffles,
            max_duration_ms: self.timeout_ms,
        }
    }

    fn input(&self) -> Vec<i64> {
        if self.values.is_empty() {
            REFERENCE_INPUT.to_vec()
        } else {
            self.values.clone()
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_exit_status(&e));
        }
    };

    let outcome = match cli.seed {
        Some(seed) => run(&cli, SeededPermuter::new(seed)),
        None => run(&cli, ThreadRngPermuter),
    };

    match outcome {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("error: failed to encode report: {e}");
                        return ExitCode::from(EXIT_FAILURE);
                    }
                }
            } else {
                println!("{:?}", report.output);
                println!("Bogobogosort finished in {:.6} seconds!", report.stats.elapsed_secs());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(error_exit_status(&e))
        }
    }
}

/// Help and version requests exit cleanly; every other parse error is a failure.
fn parse_exit_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

fn error_exit_status(err: &BogoError) -> u8 {
    if err.is_budget_exhausted() {
        EXIT_BUDGET_EXCEEDED
    } else {
        EXIT_FAILURE
    }
}

fn run<P: Permuter>(cli: &Cli, permuter: P) -> BogoResult<SortReport<i64>> {
    let input = cli.input();
    let mut output = input.clone();
    let started_at = Utc::now();

    let limits = cli.limits();
    let stats = if limits.is_unbounded() {
        let mut engine = Bogobogosort::new(permuter);
        match engine.sort(&mut output) {
            Ok(stats) => stats,
            Err(never) => match never {},
        }
    } else {
        let mut engine = Bogobogosort::with_limits(permuter, limits)?;
        engine.sort(&mut output)?
    };

    Ok(SortReport::new(started_at, input, output, stats))
}

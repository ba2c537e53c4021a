//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Puzzle solution dispatcher
///
/// Runs one day's solver against its canonical input (`inputs/NN-input`) or,
/// when any extra argument follows the day, against its test inputs.
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run a day's puzzle solver on its inputs", version)]
pub struct Args {
    /// Day to run (does nothing if omitted)
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Any extra argument switches to the day's test inputs; options after
    /// the first extra argument are collected here and not parsed
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub extra: Vec<String>,

    /// Run the test inputs instead of the canonical input
    #[arg(short, long)]
    pub tests: bool,

    /// Puzzle year whose solvers are dispatched
    #[arg(short, long, default_value_t = 2024)]
    pub year: u16,

    /// Directory holding `NN-*` input files
    #[arg(long, env = "AOC_INPUTS_DIR", default_value = "inputs")]
    pub inputs_dir: PathBuf,

    /// Tags to filter solvers (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// List registered days and their input files, then exit
    #[arg(short, long, conflicts_with = "day")]
    pub list: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

//! Configuration resolution from CLI args

use crate::cli::Args;
use std::path::{Path, PathBuf};

/// Which input files of a day are run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// The single canonical `NN-input` file
    Canonical,
    /// Every other `NN-*` file
    Tests,
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Day to run (None = do nothing)
    pub day: Option<u8>,
    /// Canonical or test inputs
    pub mode: InputMode,
    /// Puzzle year whose solvers are dispatched
    pub year: u16,
    /// Directory holding the input files
    pub inputs_dir: PathBuf,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// List registered days instead of running one
    pub list: bool,
    /// Quiet mode
    pub quiet: bool,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: &'static str,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Self {
        let mode = if args.tests || !args.extra.is_empty() {
            InputMode::Tests
        } else {
            InputMode::Canonical
        };

        let log_level = match args.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };

        Config {
            day: args.day,
            mode,
            year: args.year,
            inputs_dir: expand_tilde(&args.inputs_dir),
            tags: args.tags,
            list: args.list,
            quiet: args.quiet,
            log_level,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

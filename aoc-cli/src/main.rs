//! AOC CLI - Command-line dispatcher for one year's puzzle solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use inputs::FileRegistry;
use output::OutputFormatter;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = Config::from_args(Args::parse());
    init_logging(config.log_level);

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` or the verbosity flags
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &Config) -> Result<(), CliError> {
    let registry = build_registry(config.year, &config.tags)?;
    info!(year = config.year, solvers = registry.len(), "registered solvers");

    let executor = Executor::new(registry, config);
    let formatter = OutputFormatter::new(config.quiet);
    let mut out = io::stdout().lock();

    if config.list {
        let files = FileRegistry::scan(&config.inputs_dir)?;
        formatter.write_listing(&mut out, &executor.listing(&files))?;
        return Ok(());
    }

    let Some(day) = config.day else {
        debug!("no day given, nothing to run");
        return Ok(());
    };

    executor.ensure_solver(day)?;
    let files = FileRegistry::scan(&config.inputs_dir)?;
    debug!(
        dir = %files.dir().display(),
        days = ?files.days().collect::<Vec<_>>(),
        "input files"
    );
    let work_items = executor.collect_work_items(day, &files)?;
    info!(day, mode = ?config.mode, files = work_items.len(), "running");

    executor.execute(&files, &work_items, |result| {
        formatter.write_result(&mut out, &result)?;
        out.flush()
    })?;

    Ok(())
}

/// Build registry for one year with tag filtering
fn build_registry(year: u16, tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new().register_solver_plugins(|plugin| {
        plugin.year == year && tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
    })?;

    Ok(builder.build())
}

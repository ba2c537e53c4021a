//! Output formatting for solver results

use crate::executor::{DayListing, FileResult};
use chrono::TimeDelta;
use std::io::{self, Write};

/// Output formatter for solver results
///
/// Each result is the input file name on one line followed by the answer on
/// the next. Quiet mode drops the file name.
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Write a single result
    pub fn write_result(&self, out: &mut impl Write, result: &FileResult) -> io::Result<()> {
        if !self.quiet {
            writeln!(out, "{}", result.file)?;
        }
        writeln!(out, "{}", result.answer)
    }

    /// Write one line per registered day
    pub fn write_listing(&self, out: &mut impl Write, listing: &[DayListing]) -> io::Result<()> {
        for day in listing {
            writeln!(
                out,
                "day {:02}: parts={}, input={}, tests={}",
                day.day,
                day.parts,
                day.input.as_deref().unwrap_or("-"),
                day.tests
            )?;
        }
        Ok(())
    }
}

/// Format a TimeDelta for display
pub(crate) fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

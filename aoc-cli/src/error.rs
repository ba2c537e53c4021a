//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Input directory scan failed
    #[error("Input error: {0}")]
    Inputs(#[from] InputError),

    /// Requested day has no solver or no input files
    #[error("Unknown day {day:02} for {year}: {reason}")]
    UnknownDay { year: u16, day: u8, reason: &'static str },

    /// Day has test inputs but no canonical input file
    #[error("Day {day:02} has no canonical input (expected {day:02}-input)")]
    MissingInput { day: u8 },

    /// Writing results failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Executor error
    #[error("{0}")]
    Executor(#[from] ExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input file could not be read
    #[error("Failed to read {file}: {source}")]
    ReadInput {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// Solver failed on an input file
    #[error("Solver failed on {file}: {source}")]
    Solver {
        file: String,
        #[source]
        source: aoc_solver::SolverError,
    },

    /// Writing a result failed
    #[error("Failed to write result: {0}")]
    Output(#[source] std::io::Error),

    /// Multiple errors collected while running test inputs
    #[error("Multiple errors occurred ({} total): {}", .0.len(), join_errors(.0))]
    Multiple(Vec<ExecutorError>),
}

fn join_errors(errors: &[ExecutorError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ExecutorError {
    /// Combine two errors into one
    /// 1. If first is singular and second is Multiple: prepend first to second's vec
    /// 2. If second is singular and first is Multiple: append second to first's vec
    /// 3. If both are Multiple: concat them
    /// 4. If both are singular: create new Multiple with both
    pub fn combine(first: ExecutorError, second: ExecutorError) -> ExecutorError {
        let errors = match (first, second) {
            (ExecutorError::Multiple(mut v1), ExecutorError::Multiple(v2)) => {
                v1.extend(v2);
                v1
            }
            (first, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v);
                combined
            }
            (ExecutorError::Multiple(mut v), second) => {
                v.push(second);
                v
            }
            (first, second) => vec![first, second],
        };
        ExecutorError::Multiple(errors)
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(existing: Option<ExecutorError>, new: ExecutorError) -> ExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Input directory errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Inputs directory missing or unreadable
    #[error("Cannot read inputs directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// More than one canonical input for a day
    #[error("Day {day:02} has more than one canonical input: {first} and {second}")]
    DuplicateInput {
        day: u8,
        first: String,
        second: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_error(file: &str) -> ExecutorError {
        ExecutorError::ReadInput {
            file: file.to_string(),
            source: std::io::Error::other("denied"),
        }
    }

    fn files(error: &ExecutorError) -> Vec<String> {
        match error {
            ExecutorError::Multiple(v) => v.iter().flat_map(files).collect(),
            ExecutorError::ReadInput { file, .. } => vec![file.clone()],
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_combine_keeps_order() {
        let combined = ExecutorError::combine(read_error("a"), read_error("b"));
        let combined = ExecutorError::combine(combined, read_error("c"));
        let combined = ExecutorError::combine(read_error("z"), combined);
        assert_eq!(files(&combined), vec!["z", "a", "b", "c"]);

        match combined {
            ExecutorError::Multiple(v) => assert_eq!(v.len(), 4),
            other => panic!("expected Multiple, got {:?}", other),
        }
    }

    #[test]
    fn test_combine_opt() {
        let single = ExecutorError::combine_opt(None, read_error("a"));
        assert!(matches!(single, ExecutorError::ReadInput { .. }));

        let both = ExecutorError::combine_opt(Some(single), read_error("b"));
        assert!(both.to_string().starts_with("Multiple errors occurred (2 total)"));
    }

    #[test]
    fn test_unknown_day_message() {
        let e = CliError::UnknownDay {
            year: 2024,
            day: 7,
            reason: "no solver registered",
        };
        assert_eq!(e.to_string(), "Unknown day 07 for 2024: no solver registered");
    }
}

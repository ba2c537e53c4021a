//! Executor that runs one day's solver over its input files

use crate::config::{Config, InputMode};
use crate::error::{CliError, ExecutorError};
use crate::inputs::FileRegistry;
use crate::output::format_duration;
use aoc_solver::{Answer, SolverError, SolverRegistry};
use chrono::{TimeDelta, Utc};
use std::fs;
use tracing::{debug, warn};

/// Result of running the solver on one input file
#[derive(Debug, Clone, PartialEq)]
pub struct FileResult {
    pub day: u8,
    pub file: String,
    pub answer: Answer,
    pub parse_duration: TimeDelta,
    pub solve_duration: TimeDelta,
}

/// Work item representing one input file to solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub day: u8,
    pub file: String,
}

/// One line of the `--list` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayListing {
    pub day: u8,
    pub parts: u8,
    pub input: Option<String>,
    pub tests: usize,
}

/// Sequential executor for a single year's solvers
pub struct Executor {
    registry: SolverRegistry,
    year: u16,
    mode: InputMode,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            year: config.year,
            mode: config.mode,
        }
    }

    /// Fail with `UnknownDay` unless a solver is registered for the day
    pub fn ensure_solver(&self, day: u8) -> Result<(), CliError> {
        if self.registry.contains(self.year, day) {
            Ok(())
        } else {
            Err(CliError::UnknownDay {
                year: self.year,
                day,
                reason: "no solver registered",
            })
        }
    }

    /// Collect the input files to run for a day in the configured mode
    ///
    /// Canonical mode yields exactly one item. Test mode yields one item per
    /// test file, possibly none. The solver is checked by [`Self::ensure_solver`]
    /// before the inputs are scanned.
    pub fn collect_work_items(
        &self,
        day: u8,
        files: &FileRegistry,
    ) -> Result<Vec<WorkItem>, CliError> {
        let day_files = files.get(day).ok_or(CliError::UnknownDay {
            year: self.year,
            day,
            reason: "no input files",
        })?;

        match self.mode {
            InputMode::Canonical => {
                let file = day_files
                    .input
                    .clone()
                    .ok_or(CliError::MissingInput { day })?;
                Ok(vec![WorkItem { day, file }])
            }
            InputMode::Tests => Ok(day_files
                .tests
                .iter()
                .map(|file| WorkItem {
                    day,
                    file: file.clone(),
                })
                .collect()),
        }
    }

    /// Run every work item in order, handing each result to `emit`
    ///
    /// In canonical mode an unreadable file aborts the run. In test mode it is
    /// logged and skipped, and the collected errors are returned once every
    /// other file has run. Solver failures abort in both modes, carrying any
    /// read errors collected before them.
    pub fn execute<F>(
        &self,
        files: &FileRegistry,
        work_items: &[WorkItem],
        mut emit: F,
    ) -> Result<(), ExecutorError>
    where
        F: FnMut(FileResult) -> std::io::Result<()>,
    {
        let mut collected_error: Option<ExecutorError> = None;

        for work in work_items {
            let input = match fs::read_to_string(files.path(&work.file)) {
                Ok(input) => input,
                Err(source) => {
                    let error = ExecutorError::ReadInput {
                        file: work.file.clone(),
                        source,
                    };
                    if self.mode == InputMode::Canonical {
                        return Err(error);
                    }
                    warn!(file = %work.file, %error, "skipping unreadable test input");
                    collected_error = Some(ExecutorError::combine_opt(collected_error, error));
                    continue;
                }
            };

            let result = match self.solve_file(work, &input) {
                Ok(result) => result,
                Err(source) => {
                    let error = ExecutorError::Solver {
                        file: work.file.clone(),
                        source,
                    };
                    return Err(ExecutorError::combine_opt(collected_error, error));
                }
            };

            debug!(
                day = result.day,
                file = %result.file,
                parse = %format_duration(result.parse_duration),
                solve = %format_duration(result.solve_duration),
                "solved"
            );
            emit(result).map_err(ExecutorError::Output)?;
        }

        collected_error.map_or(Ok(()), Err)
    }

    /// Registered days of the configured year with their input files
    pub fn listing(&self, files: &FileRegistry) -> Vec<DayListing> {
        self.registry
            .iter_info()
            .filter(|info| info.year == self.year)
            .map(|info| {
                let day_files = files.get(info.day);
                DayListing {
                    day: info.day,
                    parts: info.parts,
                    input: day_files.and_then(|f| f.input.clone()),
                    tests: day_files.map_or(0, |f| f.tests.len()),
                }
            })
            .collect()
    }

    fn solve_file(&self, work: &WorkItem, input: &str) -> Result<FileResult, SolverError> {
        let mut solver = self.registry.create_solver(self.year, work.day, input)?;
        let solve_start = Utc::now();
        let answer = solver.answer()?;
        let solve_duration = Utc::now() - solve_start;

        Ok(FileResult {
            day: work.day,
            file: work.file.clone(),
            answer,
            parse_duration: solver.parse_duration(),
            solve_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, ParseError, RegisterableSolver, RegistryBuilder, SolveError, Solver};
    use tempfile::TempDir;

    /// Sums one integer per line
    struct Sum;

    impl AocParser for Sum {
        type SharedData<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            input
                .lines()
                .map(|l| {
                    l.trim()
                        .parse()
                        .map_err(|_| ParseError::InvalidFormat(l.to_string()))
                })
                .collect()
        }
    }

    impl Solver for Sum {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<i64, SolveError> {
            Ok(shared.iter().sum())
        }
    }

    fn executor(mode: InputMode) -> Executor {
        let registry = Sum
            .register_with(RegistryBuilder::new(), 2024, 1)
            .unwrap()
            .build();
        Executor {
            registry,
            year: 2024,
            mode,
        }
    }

    fn inputs(files: &[(&str, &str)]) -> (TempDir, FileRegistry) {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(temp.path().join(name), content).unwrap();
        }
        let registry = FileRegistry::scan(temp.path()).unwrap();
        (temp, registry)
    }

    fn run(
        executor: &Executor,
        files: &FileRegistry,
        day: u8,
    ) -> (Vec<FileResult>, Result<(), ExecutorError>) {
        let items = executor.collect_work_items(day, files).unwrap();
        let mut results = Vec::new();
        let outcome = executor.execute(files, &items, |r| {
            results.push(r);
            Ok(())
        });
        (results, outcome)
    }

    #[test]
    fn test_canonical_runs_exactly_one_file() {
        let (_temp, files) = inputs(&[("01-input", "3\n4"), ("01-sample", "1\n1")]);
        let (results, outcome) = run(&executor(InputMode::Canonical), &files, 1);

        outcome.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].file, "01-input");
        assert_eq!(results[0].answer, Answer::Single(7));
    }

    #[test]
    fn test_tests_mode_runs_every_test_file() {
        let (_temp, files) = inputs(&[
            ("01-input", "3\n4"),
            ("01-sample", "1\n1"),
            ("01-sample2", "5"),
        ]);
        let (results, outcome) = run(&executor(InputMode::Tests), &files, 1);

        outcome.unwrap();
        let emitted: Vec<_> = results.iter().map(|r| (r.file.as_str(), r.answer)).collect();
        assert_eq!(
            emitted,
            vec![("01-sample", Answer::Single(2)), ("01-sample2", Answer::Single(5))]
        );

        let scanned: Vec<_> = files.get(1).unwrap().tests.iter().cloned().collect();
        let printed: Vec<_> = results.into_iter().map(|r| r.file).collect();
        assert_eq!(printed, scanned);
    }

    #[test]
    fn test_tests_mode_with_no_test_files() {
        let (_temp, files) = inputs(&[("01-input", "3\n4")]);
        let (results, outcome) = run(&executor(InputMode::Tests), &files, 1);
        outcome.unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_unknown_day() {
        let (_temp, files) = inputs(&[("01-input", "1"), ("02-input", "1")]);
        let executor = executor(InputMode::Canonical);

        assert!(executor.ensure_solver(1).is_ok());
        assert!(matches!(
            executor.ensure_solver(2),
            Err(CliError::UnknownDay { day: 2, reason: "no solver registered", .. })
        ));
        assert!(executor.collect_work_items(2, &files).is_ok());

        let (_temp, empty) = inputs(&[]);
        assert!(matches!(
            executor.collect_work_items(1, &empty),
            Err(CliError::UnknownDay { day: 1, reason: "no input files", .. })
        ));
    }

    #[test]
    fn test_missing_canonical_input() {
        let (_temp, files) = inputs(&[("01-sample", "1")]);
        assert!(matches!(
            executor(InputMode::Canonical).collect_work_items(1, &files),
            Err(CliError::MissingInput { day: 1 })
        ));
    }

    #[test]
    fn test_unreadable_test_input_is_skipped() {
        let (temp, files) = inputs(&[("01-a", "1"), ("01-b", "2"), ("01-c", "3")]);
        fs::remove_file(temp.path().join("01-b")).unwrap();

        let (results, outcome) = run(&executor(InputMode::Tests), &files, 1);

        let printed: Vec<_> = results.iter().map(|r| r.file.as_str()).collect();
        assert_eq!(printed, vec!["01-a", "01-c"]);
        assert!(matches!(
            outcome,
            Err(ExecutorError::ReadInput { ref file, .. }) if file == "01-b"
        ));
    }

    #[test]
    fn test_unreadable_canonical_input_aborts() {
        let (temp, files) = inputs(&[("01-input", "1")]);
        fs::remove_file(temp.path().join("01-input")).unwrap();

        let (results, outcome) = run(&executor(InputMode::Canonical), &files, 1);
        assert!(results.is_empty());
        assert!(matches!(outcome, Err(ExecutorError::ReadInput { .. })));
    }

    #[test]
    fn test_malformed_input_aborts() {
        let (_temp, files) = inputs(&[("01-a", "x"), ("01-b", "2")]);
        let (results, outcome) = run(&executor(InputMode::Tests), &files, 1);

        assert!(results.is_empty());
        assert!(matches!(
            outcome,
            Err(ExecutorError::Solver {
                source: SolverError::ParseError(_),
                ..
            })
        ));
    }

    #[test]
    fn test_emit_failure_stops_run() {
        let (_temp, files) = inputs(&[("01-a", "1"), ("01-b", "2")]);
        let executor = executor(InputMode::Tests);
        let items = executor.collect_work_items(1, &files).unwrap();

        let mut calls = 0;
        let outcome = executor.execute(&files, &items, |_| {
            calls += 1;
            Err(std::io::Error::other("closed"))
        });
        assert_eq!(calls, 1);
        assert!(matches!(outcome, Err(ExecutorError::Output(_))));
    }

    #[test]
    fn test_listing() {
        let (_temp, files) = inputs(&[("01-input", "1"), ("01-a", ""), ("01-b", "")]);
        let listing = executor(InputMode::Canonical).listing(&files);
        assert_eq!(
            listing,
            vec![DayListing {
                day: 1,
                parts: 1,
                input: Some("01-input".to_string()),
                tests: 2,
            }]
        );
    }

    #[test]
    fn test_solver_failure_keeps_earlier_read_errors() {
        let (temp, files) = inputs(&[("01-a", "1"), ("01-b", "x"), ("01-c", "3")]);
        fs::remove_file(temp.path().join("01-a")).unwrap();

        let (results, outcome) = run(&executor(InputMode::Tests), &files, 1);

        assert!(results.is_empty());
        match outcome {
            Err(ExecutorError::Multiple(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(matches!(&errors[0], ExecutorError::ReadInput { file, .. } if file == "01-a"));
                assert!(matches!(&errors[1], ExecutorError::Solver { file, .. } if file == "01-b"));
            }
            other => panic!("expected Multiple, got {:?}", other),
        }
    }
}

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["reports"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    reports: Vec<Vec<i64>>,
    safe_counts: Option<SafeCounts>,
}

#[derive(Debug, Clone, Copy)]
pub struct SafeCounts {
    strict: usize,
    dampened: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.split_whitespace()
                    .map(str::parse::<i64>)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|reports| SharedData {
                reports,
                safe_counts: None,
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<i64, SolveError> {
        Ok(count_once_for_both(shared).strict as i64)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<i64, SolveError> {
        Ok(count_once_for_both(shared).dampened as i64)
    }
}

/// Levels move in one direction, each step by 1 to 3.
/// Reports with fewer than two levels are safe.
fn is_safe<'a>(levels: impl IntoIterator<Item = &'a i64>) -> bool {
    let diffs: Vec<i64> = levels
        .into_iter()
        .tuple_windows()
        .map(|(a, b)| b - a)
        .collect();
    diffs.iter().all(|d| (1..=3).contains(d)) || diffs.iter().all(|d| (-3..=-1).contains(d))
}

/// Safe once any single level is removed
fn is_safe_dampened(report: &[i64]) -> bool {
    (0..report.len()).any(|skip| {
        is_safe(
            report
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, level)| level),
        )
    })
}

fn count_once_for_both(shared: &mut SharedData) -> SafeCounts {
    *shared.safe_counts.get_or_insert_with(|| {
        let (safe, unsafe_reports): (Vec<_>, Vec<_>) =
            shared.reports.iter().partition(|report| is_safe(report.iter()));
        let strict = safe.len();
        let dampened = strict
            + unsafe_reports
                .into_iter()
                .filter(|report| is_safe_dampened(report))
                .count();
        SafeCounts { strict, dampened }
    })
}

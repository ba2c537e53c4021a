use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 1, tags = ["sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<i64>,
    right: Vec<i64>,
}

fn parse_line(line: &str) -> anyhow::Result<(i64, i64)> {
    let mut columns = line.split_whitespace();
    let mut next_column = |name: &str| -> anyhow::Result<i64> {
        columns
            .next()
            .ok_or_else(|| anyhow!("missing {} location id", name))?
            .parse::<i64>()
            .with_context(|| format!("{} location id is not an integer", name))
    };
    let left = next_column("left")?;
    let right = next_column("right")?;
    Ok((left, right))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (left, right): (Vec<i64>, Vec<i64>) = input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_line(line).map_err(|e| anyhow!("(line {}) {:#}", line_idx + 1, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?
            .into_iter()
            .unzip();

        Ok(SharedData { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<i64, SolveError> {
        let distance = shared
            .left
            .iter()
            .sorted_unstable()
            .zip(shared.right.iter().sorted_unstable())
            .map(|(l, r)| (l - r).abs())
            .sum();
        Ok(distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn test_example_distance() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), 11);
    }

    #[test]
    fn test_identical_lists_have_zero_distance() {
        let mut shared = Solver::parse("3 4\n4 3").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), 0);
    }

    #[test]
    fn test_missing_column_reports_line() {
        let err = Solver::parse("1 2\n3\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }

    #[test]
    fn test_non_integer_rejected() {
        assert!(Solver::parse("1 x").is_err());
    }
}

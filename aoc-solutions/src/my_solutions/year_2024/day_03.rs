use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::sync::LazyLock;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").unwrap()
});

fn operand(m: regex::Match<'_>) -> Result<i64, ParseError> {
    m.as_str()
        .parse()
        .map_err(|_| ParseError::InvalidFormat(format!("bad operand {:?}", m.as_str())))
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["regex"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(i64),
    Do,
    Dont,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        // Instructions may be split across lines
        let memory: String = input.lines().map(str::trim).collect();

        INSTRUCTION
            .captures_iter(&memory)
            .map(|caps| -> Result<Instruction, ParseError> {
                match (caps.get(1), caps.get(2)) {
                    (Some(a), Some(b)) => Ok(Instruction::Mul(operand(a)? * operand(b)?)),
                    _ if &caps[0] == "do()" => Ok(Instruction::Do),
                    _ => Ok(Instruction::Dont),
                }
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<i64, SolveError> {
        Ok(shared
            .iter()
            .filter_map(|instruction| match instruction {
                Instruction::Mul(product) => Some(product),
                _ => None,
            })
            .sum())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<i64, SolveError> {
        let (_, total) = shared
            .iter()
            .fold((true, 0), |(enabled, total), instruction| match instruction {
                Instruction::Do => (true, total),
                Instruction::Dont => (false, total),
                Instruction::Mul(product) if enabled => (enabled, total + product),
                Instruction::Mul(_) => (enabled, total),
            });
        Ok(total)
    }
}

use aoc_solver::{
    Answer, AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, RegistryBuilder,
    SolveError,
};

fn parse_numbers(input: &str) -> Result<Vec<i64>, ParseError> {
    input
        .lines()
        .map(|line| {
            line.trim()
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
        })
        .collect()
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2099, day = 1, tags = ["test", "sum"])]
pub struct SumSolver;

impl AocParser for SumSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for SumSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<i64, SolveError> {
        Ok(shared.iter().sum())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2099, day = 2, tags = ["test"])]
pub struct MinMaxSolver;

impl AocParser for MinMaxSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_numbers(input)
    }
}

impl PartSolver<1> for MinMaxSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<i64, SolveError> {
        shared
            .iter()
            .copied()
            .min()
            .ok_or_else(|| SolveError::SolveFailed("empty input".into()))
    }
}

impl PartSolver<2> for MinMaxSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<i64, SolveError> {
        shared
            .iter()
            .copied()
            .max()
            .ok_or_else(|| SolveError::SolveFailed("empty input".into()))
    }
}

// No tags at all
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2098, day = 25)]
pub struct UntaggedSolver;

impl AocParser for UntaggedSolver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for UntaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<i64, SolveError> {
        Ok(shared.len() as i64)
    }
}

#[test]
fn test_all_plugins_registered() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    assert!(registry.contains(2099, 1));
    assert!(registry.contains(2099, 2));
    assert!(registry.contains(2098, 25));
    assert_eq!(registry.get_info(2099, 2).map(|i| i.parts), Some(2));
}

#[test]
fn test_registered_solver_scenario() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let mut solver = registry
        .create_solver(2099, 1, "3\n4")
        .expect("Failed to create solver - was it registered?");
    assert_eq!(solver.answer().unwrap(), Answer::Single(7));

    let mut solver = registry.create_solver(2099, 2, "5\n-1\n9").unwrap();
    assert_eq!(solver.answer().unwrap(), Answer::Pair(-1, 9));
}

#[test]
fn test_tag_filtering() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"sum"))
        .unwrap()
        .build();

    assert!(registry.contains(2099, 1));
    assert!(!registry.contains(2099, 2));
    assert!(!registry.contains(2098, 25));
}

#[test]
fn test_year_filtering() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2098)
        .unwrap()
        .build();

    assert_eq!(registry.len(), 1);
    let mut solver = registry.create_solver(2098, 25, "abcd").unwrap();
    assert_eq!(solver.answer().unwrap().to_string(), "4");
}

#[test]
fn test_parse_error_surfaces() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let result = registry.create_solver(2099, 1, "3\nfour");
    assert!(matches!(
        result,
        Err(aoc_solver::SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));
}

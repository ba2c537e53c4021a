use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["grid"])]
pub struct Solver;

/// All eight compass directions as (row, col) steps
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Borrowed letter grid; rows may differ in length
#[derive(Debug)]
pub struct Grid<'a> {
    rows: Vec<&'a [u8]>,
}

impl<'a> Grid<'a> {
    fn get(&self, row: isize, col: isize) -> Option<u8> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.rows.get(row)?.get(col).copied()
    }

    fn cells(&self) -> impl Iterator<Item = (isize, isize, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &letter)| (r as isize, c as isize, letter))
        })
    }

    /// Does `word` start at (row, col) going in direction (dr, dc)?
    fn spells(&self, word: &[u8], (row, col): (isize, isize), (dr, dc): (isize, isize)) -> bool {
        word.iter().enumerate().all(|(i, &letter)| {
            let i = i as isize;
            self.get(row + dr * i, col + dc * i) == Some(letter)
        })
    }

    /// An `A` whose two diagonals both read `MAS` in either direction
    fn is_x_mas(&self, row: isize, col: isize) -> bool {
        let diagonal = |(r1, c1): (isize, isize), (r2, c2): (isize, isize)| {
            matches!(
                (self.get(row + r1, col + c1), self.get(row + r2, col + c2)),
                (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M'))
            )
        };
        self.get(row, col) == Some(b'A') && diagonal((-1, 1), (1, -1)) && diagonal((-1, -1), (1, 1))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        if !input.is_ascii() {
            return Err(ParseError::InvalidFormat(
                "word search must be ASCII".to_string(),
            ));
        }
        Ok(Grid {
            rows: input.lines().map(str::as_bytes).collect(),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<i64, SolveError> {
        let count = shared
            .cells()
            .filter(|&(_, _, letter)| letter == b'X')
            .map(|(row, col, _)| {
                DIRECTIONS
                    .iter()
                    .filter(|&&direction| shared.spells(b"XMAS", (row, col), direction))
                    .count()
            })
            .sum::<usize>();
        Ok(count as i64)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<i64, SolveError> {
        let count = shared
            .cells()
            .filter(|&(row, col, _)| shared.is_x_mas(row, col))
            .count();
        Ok(count as i64)
    }
}

//! Tagged puzzle answers

use crate::error::SolveError;
use std::fmt;

/// Value produced by a single puzzle part
pub type PartValue = i64;

/// The answer to a puzzle for one input
///
/// A one-part puzzle yields [`Answer::Single`], a two-part puzzle yields
/// [`Answer::Pair`]. Rendering is uniform so callers never inspect the shape:
///
/// ```
/// use aoc_solver::Answer;
///
/// assert_eq!(Answer::Single(7).to_string(), "7");
/// assert_eq!(Answer::Pair(2, 4).to_string(), "(2, 4)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    /// Answer of a one-part puzzle
    Single(PartValue),
    /// Answers of a two-part puzzle, in part order
    Pair(PartValue, PartValue),
}

impl Answer {
    /// Build an answer from part values in part order
    ///
    /// # Returns
    /// * `Ok(Answer)` - One or two values were given
    /// * `Err(SolveError::UnsupportedPartCount)` - Any other count
    pub fn from_parts(values: &[PartValue]) -> Result<Self, SolveError> {
        match *values {
            [single] => Ok(Answer::Single(single)),
            [first, second] => Ok(Answer::Pair(first, second)),
            _ => Err(SolveError::UnsupportedPartCount(values.len())),
        }
    }

    /// Number of parts carried by this answer
    pub fn parts(&self) -> u8 {
        match self {
            Answer::Single(_) => 1,
            Answer::Pair(..) => 2,
        }
    }

    /// Value for a given part (1-based)
    pub fn part(&self, part: u8) -> Option<PartValue> {
        match (self, part) {
            (Answer::Single(v), 1) | (Answer::Pair(v, _), 1) => Some(*v),
            (Answer::Pair(_, v), 2) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Single(v) => write!(f, "{}", v),
            Answer::Pair(a, b) => write!(f, "({}, {})", a, b),
        }
    }
}

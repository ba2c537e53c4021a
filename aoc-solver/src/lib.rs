//! Puzzle Solver Library
//!
//! A small, type-safe framework for day-by-day puzzle solutions (Advent of Code
//! style). Each puzzle is a solver with its own input parsing that yields one
//! or two part values, combined into an [`Answer`].
//!
//! # Overview
//!
//! This library provides:
//! - A trait-based interface for defining solvers
//! - A tagged [`Answer`] type (single value or pair)
//! - Static solver registration through `inventory`
//! - An immutable registry keyed by (year, day)
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, Answer, ParseError, PartSolver, RegistryBuilder, SolveError, Solver};
//!
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.trim().parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Day1 {
//!     const PARTS: u8 = 2;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<i64, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum()),
//!             2 => Ok(shared.iter().product()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! use aoc_solver::RegisterableSolver;
//! let registry = Day1.register_with(RegistryBuilder::new(), 2024, 1).unwrap().build();
//!
//! let mut solver = registry.create_solver(2024, 1, "3\n4").unwrap();
//! assert_eq!(solver.answer().unwrap(), Answer::Pair(7, 12));
//! ```
//!
//! # Registration
//!
//! Use the derive macros to implement [`Solver`] from [`PartSolver`] impls and
//! to submit the solver to the plugin table:
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2024, day = 1, tags = ["easy"])]
//! struct Day1Solver;
//! ```
//! [`RegistryBuilder::register_all_plugins`] collects every submitted solver.

mod answer;
mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use answer::{Answer, PartValue};
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    DAYS_PER_YEAR, FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin,
    SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

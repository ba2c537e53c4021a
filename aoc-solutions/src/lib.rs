//! Puzzle solutions with automatic registration
//!
//! This crate holds the actual puzzle solutions, organized by year. Each one
//! derives `AutoRegisterSolver`, so linking this crate is enough for the
//! dispatcher to find it.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

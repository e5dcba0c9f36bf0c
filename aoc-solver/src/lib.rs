//! Advent of Code Solver Library
//!
//! A small, type-safe harness for Advent of Code puzzles. Each day is an
//! isolated unit: a parser turns the raw input into that day's data, and one
//! solver per part computes an answer from it. Nothing is shared between days.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`] / [`PartSolver`] / [`Solver`] traits for defining a day
//! - [`SolverInstance`] and the type-erased [`DynSolver`] interface, with timing
//! - [`SolverRegistry`] for looking up solvers by year and day
//! - Link-time plugin registration through [`SolverPlugin`] and `inventory`
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Floors;
//!
//! impl AocParser for Floors {
//!     type SharedData<'a> = &'a str;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         Ok(input.trim())
//!     }
//! }
//!
//! impl PartSolver<1> for Floors {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.matches('(').count().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Floors {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.matches(')').count().to_string())
//!     }
//! }
//!
//! let mut builder = SolverRegistryBuilder::new();
//! aoc_solver::register_solver!(builder, Floors, 2015, 1);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2015, 1, "(()(").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! assert_eq!(solver.solve(2).unwrap().answer, "1");
//! ```
//!
//! # Plugin Registration
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] at link time so
//! a binary only has to call [`SolverRegistryBuilder::register_all_plugins`]:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2015, day = 1, tags = ["2015", "parsing"])]
//! pub struct Day01;
//! ```
//!
//! # Sharing Work Between Parts
//!
//! `PartSolver::solve` receives `&mut SharedData`, so part 1 can memoise a
//! result that part 2 picks up. Each part must still work when run alone.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the code generated by `AutoRegisterSolver`
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

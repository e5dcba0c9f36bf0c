//! Advent of Code puzzle solutions with automatic registration
//!
//! Each day lives in its own module and registers itself with the solver
//! framework through `#[derive(AutoRegisterSolver)]`. Days share nothing but
//! the harness traits.

#[cfg(feature = "year-2015")]
pub mod year_2015;

#[cfg(test)]
pub(crate) mod test_utils;

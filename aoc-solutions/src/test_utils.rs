use aoc_solver::{SolveError, Solver};

/// Parse `input` and solve a single part, panicking on any error
pub fn solve<S: Solver>(input: &str, part: u8) -> String {
    let mut shared = S::parse(input).unwrap_or_else(|e| panic!("parse failed: {e}"));
    S::solve_part(&mut shared, part).unwrap_or_else(|e| panic!("part {part} failed: {e}"))
}

/// Parse `input` and solve a single part, returning the solve error
pub fn solve_err<S: Solver>(input: &str, part: u8) -> SolveError {
    let mut shared = S::parse(input).unwrap_or_else(|e| panic!("parse failed: {e}"));
    match S::solve_part(&mut shared, part) {
        Ok(answer) => panic!("expected part {part} to fail, got {answer}"),
        Err(e) => e,
    }
}

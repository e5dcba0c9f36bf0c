//! Day 1: Not Quite Lisp
//!
//! `(` moves Santa up a floor, `)` moves him down. Part 1 asks for the final
//! floor, part 2 for the first instruction that reaches the basement.

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 1, tags = ["2015", "parsing"])]
pub struct Day01;

/// Floor reached by a single instruction
fn step(instruction: u8) -> i32 {
    match instruction {
        b'(' => 1,
        _ => -1,
    }
}

impl AocParser for Day01 {
    type SharedData<'a> = &'a [u8];

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let instructions = input.trim().as_bytes();
        match instructions
            .iter()
            .position(|b| !matches!(b, b'(' | b')'))
        {
            Some(index) => Err(ParseError::InvalidFormat(format!(
                "unexpected character {:?} at position {}",
                char::from(instructions[index]),
                index + 1
            ))),
            None => Ok(instructions),
        }
    }
}

impl PartSolver<1> for Day01 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let floor: i32 = shared.iter().copied().map(step).sum();
        Ok(floor.to_string())
    }
}

impl PartSolver<2> for Day01 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .scan(0i32, |floor, &instruction| {
                *floor += step(instruction);
                Some(*floor)
            })
            .position(|floor| floor == -1)
            .map(|index| (index + 1).to_string())
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("Santa never enters the basement").into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{solve, solve_err};

    #[test]
    fn test_part1_examples() {
        for (input, floor) in [
            ("(())", "0"),
            ("()()", "0"),
            ("(((", "3"),
            ("(()(()(", "3"),
            ("))(((((", "3"),
            ("())", "-1"),
            ("))(", "-1"),
            (")))", "-3"),
            (")())())", "-3"),
        ] {
            assert_eq!(solve::<Day01>(input, 1), floor, "input {input}");
        }
    }

    #[test]
    fn test_part2_examples() {
        assert_eq!(solve::<Day01>(")", 2), "1");
        assert_eq!(solve::<Day01>("()())", 2), "5");
    }

    #[test]
    fn test_trailing_newline_is_ignored() {
        assert_eq!(solve::<Day01>("(()\n", 1), "1");
    }

    #[test]
    fn test_never_reaching_basement_fails() {
        assert!(matches!(
            solve_err::<Day01>("(()", 2),
            SolveError::SolveFailed(_)
        ));
    }

    #[test]
    fn test_rejects_unknown_character() {
        let err = Day01::parse("(x)").unwrap_err();
        assert!(err.to_string().contains("position 2"), "{err}");
    }
}

//! Day 5: Doesn't He Have Intern-Elves For This?

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 5, tags = ["2015", "strings"])]
pub struct Day05;

const FORBIDDEN: [&[u8; 2]; 4] = [b"ab", b"cd", b"pq", b"xy"];

/// At least three vowels, a doubled letter, and none of the forbidden pairs
pub fn is_nice(s: &str) -> bool {
    let bytes = s.as_bytes();
    let vowels = bytes.iter().filter(|&&b| b"aeiou".contains(&b)).count();

    vowels >= 3
        && bytes.iter().tuple_windows().any(|(a, b)| a == b)
        && !bytes.windows(2).any(|pair| FORBIDDEN.iter().any(|bad| pair == &bad[..]))
}

/// A pair repeated without overlap, and a letter repeated with one letter between
pub fn is_nice_v2(s: &str) -> bool {
    let bytes = s.as_bytes();

    let repeated_pair = (0..bytes.len().saturating_sub(1)).any(|i| {
        let pair = &bytes[i..i + 2];
        bytes[i + 2..].windows(2).any(|other| other == pair)
    });

    repeated_pair && bytes.iter().tuple_windows().any(|(a, _, c)| a == c)
}

impl AocParser for Day05 {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                if line.bytes().all(|b| b.is_ascii_lowercase()) {
                    Ok(line)
                } else {
                    Err(ParseError::InvalidFormat(format!(
                        "(line {}) expected lowercase letters, got {:?}",
                        line_idx + 1,
                        line
                    )))
                }
            })
            .collect()
    }
}

impl PartSolver<1> for Day05 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| is_nice(s)).count().to_string())
    }
}

impl PartSolver<2> for Day05 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|s| is_nice_v2(s)).count().to_string())
    }
}

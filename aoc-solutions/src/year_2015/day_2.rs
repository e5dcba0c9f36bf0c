//! Day 2: I Was Told There Would Be No Math

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::str::FromStr;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 2, tags = ["2015", "parsing"])]
pub struct Day02;

/// A present box, dimensions stored in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Present {
    dims: [u128; 3],
}

impl Present {
    pub fn new(l: u32, w: u32, h: u32) -> Self {
        let mut dims = [l, w, h].map(u128::from);
        dims.sort_unstable();
        Self { dims }
    }

    /// Surface area plus the area of the smallest side as slack
    pub fn paper(&self) -> u128 {
        let [a, b, c] = self.dims;
        2 * (a * b + b * c + c * a) + a * b
    }

    /// Smallest perimeter plus a bow as long as the volume
    pub fn ribbon(&self) -> u128 {
        let [a, b, c] = self.dims;
        2 * (a + b) + a * b * c
    }
}

impl FromStr for Present {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split('x')
            .map(|n| n.trim().parse::<u32>().with_context(|| format!("bad dimension {n:?}")))
            .collect::<Result<Vec<_>, _>>()?;

        match parts[..] {
            [l, w, h] if l == 0 || w == 0 || h == 0 => bail!("dimensions must be positive, got {s:?}"),
            [l, w, h] => Ok(Present::new(l, w, h)),
            _ => Err(anyhow!("expected LxWxH, got {s:?}")),
        }
    }
}

/// Sum a per-present measure, failing instead of wrapping
fn total(presents: &[Present], measure: fn(&Present) -> u128) -> Result<String, SolveError> {
    presents
        .iter()
        .map(measure)
        .try_fold(0u128, u128::checked_add)
        .map(|sum| sum.to_string())
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("total does not fit in 128 bits").into()))
}

impl AocParser for Day02 {
    type SharedData<'a> = Vec<Present>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.trim()
                    .parse::<Present>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Day02 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total(shared, Present::paper)
    }
}

impl PartSolver<2> for Day02 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total(shared, Present::ribbon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::solve;

    #[test]
    fn test_present_parses_dimensions() {
        assert_eq!("2x3x4".parse::<Present>().unwrap(), Present::new(2, 3, 4));
        assert_eq!("4x2x3".parse::<Present>().unwrap(), Present::new(2, 3, 4));
    }

    #[test]
    fn test_part1_examples() {
        assert_eq!(solve::<Day02>("2x3x4", 1), "58");
        assert_eq!(solve::<Day02>("1x1x10", 1), "43");
        assert_eq!(solve::<Day02>("2x3x4\n1x1x10\n", 1), "101");
    }

    #[test]
    fn test_part2_examples() {
        assert_eq!(solve::<Day02>("2x3x4", 2), "34");
        assert_eq!(solve::<Day02>("1x1x10", 2), "14");
        assert_eq!(solve::<Day02>("2x3x4\n1x1x10\n", 2), "48");
    }

    #[test]
    fn test_rejects_malformed_lines() {
        let err = Day02::parse("2x3x4\n2x3\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");

        assert!(Day02::parse("2x3xq").is_err());
    }

    #[test]
    fn test_rejects_empty_boxes() {
        assert!("0x1x1".parse::<Present>().is_err());
        assert!("3x0x2".parse::<Present>().is_err());

        let err = Day02::parse("2x3x4\n1x1x0\n").unwrap_err();
        assert!(err.to_string().contains("positive"), "{err}");
    }

    #[test]
    fn test_rejects_dimensions_past_u32() {
        assert!("4294967296x1x1".parse::<Present>().is_err());
        assert!(Day02::parse("1x1x99999999999999999999").is_err());
    }

    #[test]
    fn test_largest_boxes_do_not_overflow() {
        let input = "4294967295x4294967295x4294967295";
        assert_eq!(solve::<Day02>(input, 1), "129127208455837319175");
        assert_eq!(solve::<Day02>(input, 2), "79228162458924105402480066555");
    }
}

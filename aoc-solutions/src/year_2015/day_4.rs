//! Day 4: The Ideal Stocking Stuffer
//!
//! Mine AdventCoins: find the lowest positive number that, appended to the
//! secret key, gives an MD5 hash whose hex form starts with enough zeroes.

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use md5::{Digest, Md5};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 4, tags = ["2015", "brute-force"])]
pub struct Day04;

/// Give up after this many candidates
const SEARCH_LIMIT: u64 = 100_000_000;

#[derive(Debug)]
pub struct SharedData<'a> {
    key: &'a str,
    /// Part 1 answer; every six-zero hash is also a five-zero hash, so part 2
    /// never needs to look below it.
    five_zeroes: Option<u64>,
}

/// Whether the hex form of `digest` starts with `zeroes` zero digits
fn has_leading_zeroes(digest: &[u8], zeroes: usize) -> bool {
    let full_bytes = zeroes / 2;
    digest.len() >= full_bytes
        && digest[..full_bytes].iter().all(|&b| b == 0)
        && (zeroes % 2 == 0 || digest.get(full_bytes).is_some_and(|&b| b >> 4 == 0))
}

/// Lowest `n >= start` whose hash has the requested number of leading zeroes
fn mine(key: &str, zeroes: usize, start: u64) -> Result<u64, SolveError> {
    let prefix = Md5::new_with_prefix(key.as_bytes());

    (start..SEARCH_LIMIT)
        .find(|n| {
            let mut hasher = prefix.clone();
            hasher.update(n.to_string().as_bytes());
            has_leading_zeroes(&hasher.finalize(), zeroes)
        })
        .inspect(|n| tracing::debug!(key, zeroes, n, "found coin"))
        .ok_or_else(|| {
            SolveError::SolveFailed(
                anyhow!("no hash with {zeroes} leading zeroes below {SEARCH_LIMIT}").into(),
            )
        })
}

fn five_zeroes(shared: &mut SharedData<'_>) -> Result<u64, SolveError> {
    if let Some(n) = shared.five_zeroes {
        return Ok(n);
    }
    let n = mine(shared.key, 5, 1)?;
    shared.five_zeroes = Some(n);
    Ok(n)
}

impl AocParser for Day04 {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let key = input.trim();
        if key.is_empty() {
            return Err(ParseError::MissingData("secret key is empty".into()));
        }
        Ok(SharedData {
            key,
            five_zeroes: None,
        })
    }
}

impl PartSolver<1> for Day04 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        five_zeroes(shared).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Day04 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let start = five_zeroes(shared)?;
        mine(shared.key, 6, start).map(|n| n.to_string())
    }
}

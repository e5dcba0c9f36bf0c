//! Day 3: Perfectly Spherical Houses in a Vacuum
//!
//! Presents are delivered on an infinite grid. Part 2 splits the directions
//! between Santa (even moves) and Robo-Santa (odd moves).

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 3, tags = ["2015", "grid"])]
pub struct Day03;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl TryFrom<u8> for Direction {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            b'^' => Ok(Direction::North),
            b'v' => Ok(Direction::South),
            b'>' => Ok(Direction::East),
            b'<' => Ok(Direction::West),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pos {
    x: i32,
    y: i32,
}

impl Pos {
    fn step(self, direction: Direction) -> Self {
        let Pos { x, y } = self;
        match direction {
            Direction::North => Pos { x, y: y + 1 },
            Direction::South => Pos { x, y: y - 1 },
            Direction::East => Pos { x: x + 1, y },
            Direction::West => Pos { x: x - 1, y },
        }
    }
}

/// Every house visited along `moves`, starting from (and including) the origin
fn visit(moves: impl Iterator<Item = Direction>, visited: &mut HashSet<Pos>) {
    let mut pos = Pos::default();
    visited.insert(pos);
    for direction in moves {
        pos = pos.step(direction);
        visited.insert(pos);
    }
    tracing::trace!(?pos, houses = visited.len(), "route finished");
}

impl AocParser for Day03 {
    type SharedData<'a> = Vec<Direction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .bytes()
            .enumerate()
            .map(|(index, b)| {
                Direction::try_from(b).map_err(|c| {
                    ParseError::InvalidFormat(format!(
                        "unexpected direction {:?} at position {}",
                        char::from(c),
                        index + 1
                    ))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Day03 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut visited = HashSet::new();
        visit(shared.iter().copied(), &mut visited);
        Ok(visited.len().to_string())
    }
}

impl PartSolver<2> for Day03 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut visited = HashSet::new();
        visit(shared.iter().copied().step_by(2), &mut visited);
        visit(shared.iter().copied().skip(1).step_by(2), &mut visited);
        Ok(visited.len().to_string())
    }
}

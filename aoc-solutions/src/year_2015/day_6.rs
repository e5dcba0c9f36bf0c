//! Day 6: Probably a Fire Hazard
//!
//! A million lights in a 1000x1000 grid, driven by rectangle instructions.
//! Part 1 treats them as on/off switches, part 2 as brightness dials.

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use regex::Regex;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::LazyLock;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 6, tags = ["2015", "grid", "simulation"])]
pub struct Day06;

pub const GRID_SIZE: usize = 1000;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(turn on|turn off|toggle) (\d+),(\d+) through (\d+),(\d+)$").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    On,
    Off,
    Toggle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    action: Action,
    xs: RangeInclusive<usize>,
    ys: RangeInclusive<usize>,
}

impl FromStr for Instruction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = INSTRUCTION
            .captures(s)
            .ok_or_else(|| anyhow!("unrecognised instruction {s:?}"))?;

        let action = match &caps[1] {
            "turn on" => Action::On,
            "turn off" => Action::Off,
            _ => Action::Toggle,
        };

        let coord = |i: usize| -> anyhow::Result<usize> {
            let value: usize = caps[i]
                .parse()
                .with_context(|| format!("bad coordinate {:?}", &caps[i]))?;
            if value >= GRID_SIZE {
                bail!("coordinate {value} is outside the grid");
            }
            Ok(value)
        };
        let (x1, y1, x2, y2) = (coord(2)?, coord(3)?, coord(4)?, coord(5)?);

        Ok(Instruction {
            action,
            xs: x1.min(x2)..=x1.max(x2),
            ys: y1.min(y2)..=y1.max(y2),
        })
    }
}

/// Square grid of lights stored row-major
pub struct Grid<T> {
    cells: Vec<T>,
}

impl<T: Copy> Grid<T> {
    pub fn new(initial: T) -> Self {
        Self {
            cells: vec![initial; GRID_SIZE * GRID_SIZE],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> T {
        self.cells[y * GRID_SIZE + x]
    }

    /// Apply `f` to every light in the instruction's rectangle
    pub fn apply(&mut self, instruction: &Instruction, f: impl Fn(T) -> T) {
        for y in instruction.ys.clone() {
            let row = &mut self.cells[y * GRID_SIZE..(y + 1) * GRID_SIZE];
            for cell in &mut row[instruction.xs.clone()] {
                *cell = f(*cell);
            }
        }
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }
}

/// Part 1 semantics: lights are plain switches
pub fn switch(grid: &mut Grid<bool>, instruction: &Instruction) {
    match instruction.action {
        Action::On => grid.apply(instruction, |_| true),
        Action::Off => grid.apply(instruction, |_| false),
        Action::Toggle => grid.apply(instruction, |lit| !lit),
    }
}

/// Part 2 semantics: lights are brightness dials that never go below zero
pub fn dim(grid: &mut Grid<u32>, instruction: &Instruction) {
    match instruction.action {
        Action::On => grid.apply(instruction, |b| b + 1),
        Action::Off => grid.apply(instruction, |b| b.saturating_sub(1)),
        Action::Toggle => grid.apply(instruction, |b| b + 2),
    }
}

impl AocParser for Day06 {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                line.parse()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", line_idx + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Day06 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = Grid::new(false);
        for instruction in shared.iter() {
            switch(&mut grid, instruction);
        }
        Ok(grid.cells().iter().filter(|&&lit| lit).count().to_string())
    }
}

impl PartSolver<2> for Day06 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = Grid::new(0u32);
        for instruction in shared.iter() {
            dim(&mut grid, instruction);
        }
        let total: u64 = grid.cells().iter().map(|&b| u64::from(b)).sum();
        Ok(total.to_string())
    }
}

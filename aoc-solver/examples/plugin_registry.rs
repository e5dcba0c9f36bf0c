//! Registering a solver through the plugin system and running it
//!
//! Part 1 of `Stats` remembers the sum so part 2 can reuse it when both run
//! on the same instance.
//!
//! Run with: cargo run -p aoc-solver --example plugin_registry

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

pub struct Numbers {
    values: Vec<i64>,
    sum: Option<i64>,
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2034, day = 25, tags = ["demo"])]
pub struct Stats;

impl AocParser for Stats {
    type SharedData<'a> = Numbers;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let values = input
            .split_whitespace()
            .map(|n| {
                n.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("expected integer, got {n:?}")))
            })
            .collect::<Result<Vec<i64>, _>>()?;
        Ok(Numbers { values, sum: None })
    }
}

impl PartSolver<1> for Stats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = *shared.sum.get_or_insert_with(|| shared.values.iter().sum());
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Stats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.values.is_empty() {
            return Err(SolveError::SolveFailed("no numbers to average".into()));
        }
        let sum = match shared.sum {
            Some(sum) => {
                println!("reusing part 1 sum {sum}");
                sum
            }
            None => shared.values.iter().sum(),
        };
        Ok(format!("{:.2}", sum as f64 / shared.values.len() as f64))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"demo"))?
        .build();

    for info in registry.storage().iter_info() {
        println!("registered {}/{:02} with {} part(s)", info.year, info.day, info.parts);
    }

    let mut solver = registry.create_solver(2034, 25, "3 5 10\n")?;
    for part in 1..=solver.parts() {
        let result = solver.solve(part)?;
        println!("Part {part}: {} (solve: {})", result.answer, result.duration());
    }
    println!("parse: {}", solver.parse_duration());

    Ok(())
}

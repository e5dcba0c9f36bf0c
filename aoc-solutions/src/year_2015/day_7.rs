//! Day 7: Some Assembly Required
//!
//! A circuit of 16-bit wires and bitwise gates. Each wire is driven by exactly
//! one source and gets its signal once all of that source's inputs have one.

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 7, tags = ["2015", "simulation", "graph"])]
pub struct Day07;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    Wire(&'a str),
    Value(u16),
}

impl<'a> Operand<'a> {
    fn parse(token: &'a str) -> anyhow::Result<Self> {
        if token.bytes().all(|b| b.is_ascii_digit()) {
            let value = token
                .parse()
                .with_context(|| format!("bad signal {token:?}"))?;
            Ok(Operand::Value(value))
        } else if token.bytes().all(|b| b.is_ascii_lowercase()) {
            Ok(Operand::Wire(token))
        } else {
            Err(anyhow!("bad operand {token:?}"))
        }
    }

    fn signal(&self, signals: &HashMap<&'a str, u16>) -> Option<u16> {
        match self {
            Operand::Wire(wire) => signals.get(wire).copied(),
            Operand::Value(value) => Some(*value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate<'a> {
    Assign(Operand<'a>),
    And(Operand<'a>, Operand<'a>),
    Or(Operand<'a>, Operand<'a>),
    LShift(Operand<'a>, Operand<'a>),
    RShift(Operand<'a>, Operand<'a>),
    Not(Operand<'a>),
}

impl<'a> Gate<'a> {
    fn parse(expr: &'a str) -> anyhow::Result<Self> {
        let tokens: Vec<&str> = expr.split_whitespace().collect();
        let gate = match tokens[..] {
            [a] => Gate::Assign(Operand::parse(a)?),
            ["NOT", a] => Gate::Not(Operand::parse(a)?),
            [a, op, b] => {
                let (a, b) = (Operand::parse(a)?, Operand::parse(b)?);
                match op {
                    "AND" => Gate::And(a, b),
                    "OR" => Gate::Or(a, b),
                    "LSHIFT" => Gate::LShift(a, b),
                    "RSHIFT" => Gate::RShift(a, b),
                    other => bail!("unknown gate {other:?}"),
                }
            }
            _ => bail!("unrecognised expression {expr:?}"),
        };
        Ok(gate)
    }

    /// Output signal, or `None` while an input is still unknown
    fn evaluate(&self, signals: &HashMap<&'a str, u16>) -> Option<u16> {
        let shift = |v: u16, n: u16, f: fn(u16, u32) -> Option<u16>| f(v, u32::from(n)).unwrap_or(0);
        Some(match self {
            Gate::Assign(a) => a.signal(signals)?,
            Gate::Not(a) => !a.signal(signals)?,
            Gate::And(a, b) => a.signal(signals)? & b.signal(signals)?,
            Gate::Or(a, b) => a.signal(signals)? | b.signal(signals)?,
            Gate::LShift(a, b) => shift(a.signal(signals)?, b.signal(signals)?, u16::checked_shl),
            Gate::RShift(a, b) => shift(a.signal(signals)?, b.signal(signals)?, u16::checked_shr),
        })
    }
}

/// Wire name to the gate driving it
pub type Circuit<'a> = HashMap<&'a str, Gate<'a>>;

#[derive(Debug)]
pub struct SharedData<'a> {
    circuit: Circuit<'a>,
    /// Signal on wire `a` from part 1, reused as the override for part 2
    signal_a: Option<u16>,
}

/// Propagate signals until every wire has one
pub fn resolve<'a>(circuit: &Circuit<'a>) -> Result<HashMap<&'a str, u16>, SolveError> {
    let mut signals = HashMap::with_capacity(circuit.len());
    let mut pending: Vec<(&'a str, &Gate<'a>)> = circuit.iter().map(|(w, g)| (*w, g)).collect();
    let mut rounds = 0usize;

    while !pending.is_empty() {
        let before = pending.len();
        pending.retain(|(wire, gate)| match gate.evaluate(&signals) {
            Some(signal) => {
                signals.insert(*wire, signal);
                false
            }
            None => true,
        });
        rounds += 1;

        if pending.len() == before {
            let stuck = pending.iter().map(|(wire, _)| *wire).take(5).collect::<Vec<_>>();
            return Err(SolveError::SolveFailed(
                anyhow!("{} wires never receive a signal (e.g. {stuck:?})", pending.len()).into(),
            ));
        }
    }

    tracing::debug!(wires = signals.len(), rounds, "circuit settled");
    Ok(signals)
}

fn signal_on<'a>(circuit: &Circuit<'a>, wire: &str) -> Result<u16, SolveError> {
    resolve(circuit)?
        .get(wire)
        .copied()
        .ok_or_else(|| SolveError::SolveFailed(anyhow!("circuit has no wire {wire:?}").into()))
}

fn signal_a(shared: &mut SharedData<'_>) -> Result<u16, SolveError> {
    if let Some(signal) = shared.signal_a {
        return Ok(signal);
    }
    let signal = signal_on(&shared.circuit, "a")?;
    shared.signal_a = Some(signal);
    Ok(signal)
}

impl AocParser for Day07 {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut circuit = Circuit::new();

        for (line_idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let invalid = |msg: String| ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, msg));

            let (expr, wire) = line
                .split_once(" -> ")
                .ok_or_else(|| invalid(format!("expected `<expr> -> <wire>`, got {line:?}")))?;
            let wire = wire.trim();
            if !matches!(Operand::parse(wire), Ok(Operand::Wire(_))) {
                return Err(invalid(format!("bad wire name {wire:?}")));
            }
            let gate = Gate::parse(expr).map_err(|e| invalid(format!("{e:#}")))?;

            match circuit.entry(wire) {
                Entry::Occupied(_) => return Err(invalid(format!("wire {wire:?} has more than one source"))),
                Entry::Vacant(slot) => {
                    slot.insert(gate);
                }
            }
        }

        Ok(SharedData {
            circuit,
            signal_a: None,
        })
    }
}

impl PartSolver<1> for Day07 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        signal_a(shared).map(|signal| signal.to_string())
    }
}

impl PartSolver<2> for Day07 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let signal = signal_a(shared)?;
        if !shared.circuit.contains_key("b") {
            return Err(SolveError::SolveFailed(anyhow!("circuit has no wire \"b\" to override").into()));
        }

        let mut rewired = shared.circuit.clone();
        rewired.insert("b", Gate::Assign(Operand::Value(signal)));
        signal_on(&rewired, "a").map(|signal| signal.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{solve, solve_err};

    const EXAMPLE: &str = "\
123 -> x
456 -> y
x AND y -> d
x OR y -> e
x LSHIFT 2 -> f
y RSHIFT 2 -> g
NOT x -> h
NOT y -> i
";

    #[test]
    fn test_example_circuit() {
        let shared = Day07::parse(EXAMPLE).unwrap();
        let signals = resolve(&shared.circuit).unwrap();

        let expected = [
            ("d", 72),
            ("e", 507),
            ("f", 492),
            ("g", 114),
            ("h", 65412),
            ("i", 65079),
            ("x", 123),
            ("y", 456),
        ];
        assert_eq!(signals.len(), expected.len());
        for (wire, signal) in expected {
            assert_eq!(signals[wire], signal, "wire {wire}");
        }
    }

    #[test]
    fn test_out_of_order_definitions() {
        let input = "b LSHIFT 1 -> a\nc -> b\n5 -> c\n";
        assert_eq!(solve::<Day07>(input, 1), "10");
    }

    #[test]
    fn test_part2_overrides_b() {
        let input = "5 -> b\nb LSHIFT 1 -> a\n";
        assert_eq!(solve::<Day07>(input, 1), "10");
        assert_eq!(solve::<Day07>(input, 2), "20");
    }

    #[test]
    fn test_part2_reuses_part1_signal() {
        let mut shared = Day07::parse("5 -> b\nb LSHIFT 1 -> a\n").unwrap();
        assert_eq!(<Day07 as PartSolver<1>>::solve(&mut shared).unwrap(), "10");
        assert_eq!(shared.signal_a, Some(10));
        assert_eq!(<Day07 as PartSolver<2>>::solve(&mut shared).unwrap(), "20");
    }

    #[test]
    fn test_wide_shifts_clear_the_wire() {
        let input = "1 LSHIFT 16 -> a\n";
        assert_eq!(solve::<Day07>(input, 1), "0");
    }

    #[test]
    fn test_missing_wires_fail() {
        assert!(matches!(solve_err::<Day07>(EXAMPLE, 1), SolveError::SolveFailed(_)));
        assert!(matches!(solve_err::<Day07>("3 -> a\n", 2), SolveError::SolveFailed(_)));
    }

    #[test]
    fn test_unresolvable_circuit_fails() {
        let input = "b -> a\na -> b\n";
        assert!(matches!(solve_err::<Day07>(input, 1), SolveError::SolveFailed(_)));
        assert!(matches!(solve_err::<Day07>("q AND 1 -> a\n", 1), SolveError::SolveFailed(_)));
    }

    #[test]
    fn test_rejects_malformed_circuits() {
        let err = Day07::parse("1 -> a\n2 -> a\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");

        assert!(Day07::parse("x XOR y -> z\n").is_err());
        assert!(Day07::parse("x AND y\n").is_err());
        assert!(Day07::parse("70000 -> a\n").is_err());
        assert!(Day07::parse("1 -> A\n").is_err());
    }
}

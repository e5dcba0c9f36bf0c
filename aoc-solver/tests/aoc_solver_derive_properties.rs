//! Property-based tests for the AocSolver derive macro

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

/// Borrowing solver: counts opening and closing brackets
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Brackets;

impl AocParser for Brackets {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let input = input.trim();
        match input.chars().find(|c| !matches!(c, '(' | ')')) {
            Some(c) => Err(ParseError::InvalidFormat(format!("unexpected {:?}", c))),
            None => Ok(input),
        }
    }
}

impl PartSolver<1> for Brackets {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.matches('(').count().to_string())
    }
}

impl PartSolver<2> for Brackets {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.matches(')').count().to_string())
    }
}

fn bracket_string() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just('('), Just(')')], 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `solve_part(N)` gives the same answer as `PartSolver<N>::solve`
    #[test]
    fn solve_part_dispatches_to_part_solver(input in bracket_string(), part in 1u8..=2) {
        let mut via_dispatch = Brackets::parse(&input).unwrap();
        let mut direct = Brackets::parse(&input).unwrap();

        let dispatched = Brackets::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <Brackets as PartSolver<1>>::solve(&mut direct),
            2 => <Brackets as PartSolver<2>>::solve(&mut direct),
            _ => unreachable!(),
        };

        prop_assert_eq!(dispatched, expected.unwrap());
    }

    /// Parts without a `PartSolver` impl are rejected with `PartNotImplemented`
    #[test]
    fn invalid_part_returns_not_implemented(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = Brackets::parse("(()").unwrap();

        match Brackets::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }

    /// The two parts together account for every character
    #[test]
    fn parts_partition_input(input in bracket_string()) {
        let mut shared = Brackets::parse(&input).unwrap();
        let opens: usize = Brackets::solve_part(&mut shared, 1).unwrap().parse().unwrap();
        let closes: usize = Brackets::solve_part(&mut shared, 2).unwrap().parse().unwrap();

        prop_assert_eq!(opens + closes, input.len());
    }
}

/// Memoising solver: part 1 caches a running total that part 2 reuses
mod memoised {
    use super::*;

    struct Ledger {
        entries: Vec<i64>,
        balance: Option<i64>,
    }

    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct LedgerSolver;

    impl AocParser for LedgerSolver {
        type SharedData<'a> = Ledger;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            let entries = input
                .lines()
                .filter(|l| !l.is_empty())
                .map(|l| {
                    l.parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("bad entry {:?}", l)))
                })
                .collect::<Result<_, _>>()?;
            Ok(Ledger {
                entries,
                balance: None,
            })
        }
    }

    fn balance(ledger: &mut Ledger) -> i64 {
        *ledger
            .balance
            .get_or_insert_with(|| ledger.entries.iter().sum())
    }

    impl PartSolver<1> for LedgerSolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok(balance(shared).to_string())
        }
    }

    impl PartSolver<2> for LedgerSolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            Ok((balance(shared) * 2).to_string())
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn memoised_value_is_visible_to_later_parts(entries in prop::collection::vec(-1000i64..1000, 0..16)) {
            let input = entries.iter().map(i64::to_string).collect::<Vec<_>>().join("\n");
            let expected: i64 = entries.iter().sum();
            let mut shared = LedgerSolver::parse(&input).unwrap();

            prop_assert_eq!(LedgerSolver::solve_part(&mut shared, 1).unwrap(), expected.to_string());
            prop_assert_eq!(shared.balance, Some(expected));
            prop_assert_eq!(LedgerSolver::solve_part(&mut shared, 2).unwrap(), (expected * 2).to_string());
        }
    }

    #[test]
    fn part2_alone_matches_part2_after_part1() {
        let mut fresh = LedgerSolver::parse("5\n-2\n10").unwrap();
        let mut warmed = LedgerSolver::parse("5\n-2\n10").unwrap();
        LedgerSolver::solve_part(&mut warmed, 1).unwrap();

        assert_eq!(
            LedgerSolver::solve_part(&mut fresh, 2).unwrap(),
            LedgerSolver::solve_part(&mut warmed, 2).unwrap()
        );
    }
}

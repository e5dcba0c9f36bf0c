//! Day 8: Matchsticks

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 8, tags = ["2015", "strings"])]
pub struct Day08;

/// Characters the literal occupies in memory once its escapes are decoded
///
/// Expects the surrounding quotes to be present. Recognised escapes are
/// `\\`, `\"` and `\x` followed by two hex digits; any other backslash counts
/// as a plain character.
pub fn memory_len(literal: &str) -> usize {
    let body = &literal.as_bytes()[1..literal.len() - 1];
    let mut count = 0;
    let mut i = 0;

    while i < body.len() {
        i += match body[i..] {
            [b'\\', b'\\' | b'"', ..] => 2,
            [b'\\', b'x', h, l, ..] if h.is_ascii_hexdigit() && l.is_ascii_hexdigit() => 4,
            _ => 1,
        };
        count += 1;
    }
    count
}

/// Length of the literal after quoting it again
pub fn encoded_len(literal: &str) -> usize {
    literal.len() + 2 + literal.bytes().filter(|b| matches!(b, b'"' | b'\\')).count()
}

impl AocParser for Day08 {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                if line.len() >= 2 && line.starts_with('"') && line.ends_with('"') {
                    Ok(line)
                } else {
                    Err(ParseError::InvalidFormat(format!(
                        "(line {}) expected a double-quoted literal, got {:?}",
                        line_idx + 1,
                        line
                    )))
                }
            })
            .collect()
    }
}

impl PartSolver<1> for Day08 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let overhead: usize = shared.iter().map(|s| s.len() - memory_len(s)).sum();
        Ok(overhead.to_string())
    }
}

impl PartSolver<2> for Day08 {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let growth: usize = shared.iter().map(|s| encoded_len(s) - s.len()).sum();
        Ok(growth.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::solve;
    use proptest::prelude::*;

    const EXAMPLE: &str = r#"""
"abc"
"aaa\"aaa"
"\x27"
"#;

    #[test]
    fn test_memory_len() {
        assert_eq!(memory_len(r#""""#), 0);
        assert_eq!(memory_len(r#""abc""#), 3);
        assert_eq!(memory_len(r#""aaa\"aaa""#), 7);
        assert_eq!(memory_len(r#""\x27""#), 1);
        assert_eq!(memory_len(r#""\\x27""#), 4);
    }

    #[test]
    fn test_encoded_len() {
        assert_eq!(encoded_len(r#""""#), 6);
        assert_eq!(encoded_len(r#""abc""#), 9);
        assert_eq!(encoded_len(r#""aaa\"aaa""#), 16);
        assert_eq!(encoded_len(r#""\x27""#), 11);
    }

    #[test]
    fn test_examples() {
        assert_eq!(solve::<Day08>(EXAMPLE, 1), "12");
        assert_eq!(solve::<Day08>(EXAMPLE, 2), "19");
    }

    #[test]
    fn test_rejects_unquoted_lines() {
        assert!(Day08::parse("\"abc\"\nabc\n").is_err());
        assert!(Day08::parse("\"\n").is_err());
    }

    proptest! {
        /// Literals without escapes decode to their own body
        #[test]
        fn prop_plain_literals(body in "[a-z]{0,40}") {
            let literal = format!("\"{body}\"");
            prop_assert_eq!(memory_len(&literal), body.len());
            prop_assert_eq!(encoded_len(&literal), literal.len() + 4);
        }

        /// Every escape sequence decodes to exactly one character
        #[test]
        fn prop_escapes_decode_to_one_char(
            pieces in prop::collection::vec(
                prop_oneof![
                    "[a-z]".prop_map(|s| (s, 1usize)),
                    Just((r"\\".to_string(), 1usize)),
                    Just((r#"\""#.to_string(), 1usize)),
                    "[0-9a-f]{2}".prop_map(|h| (format!(r"\x{h}"), 1usize)),
                ],
                0..20,
            )
        ) {
            let body: String = pieces.iter().map(|(s, _)| s.as_str()).collect();
            let expected: usize = pieces.iter().map(|(_, n)| n).sum();
            prop_assert_eq!(memory_len(&format!("\"{body}\"")), expected);
        }
    }
}

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["2023", "strings"])]
pub struct Solver;

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".into()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, true)
    }
}

fn calibration_sum(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    lines
        .iter()
        .enumerate()
        .map(|(line_idx, line)| -> Result<u32, anyhow::Error> {
            let mut digits = (0..line.len()).filter_map(|i| digit_at(line, i, spelled));
            let first = digits
                .next()
                .ok_or_else(|| anyhow!("(line {}) no digit in {:?}", line_idx + 1, line))?;
            let last = digits.last().unwrap_or(first);
            Ok(first * 10 + last)
        })
        .sum::<Result<u32, _>>()
        .map(|sum| sum.to_string())
        .map_err(SolveError::failed)
}

/// Digit starting at byte `i`, either as an ASCII digit or (optionally) a spelled-out word.
/// Words may overlap, e.g. "eightwo" holds both 8 and 2.
fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u32> {
    let rest = &line.as_bytes()[i..];
    match rest.first() {
        Some(b) if b.is_ascii_digit() => Some(u32::from(b - b'0')),
        Some(_) if spelled => WORDS
            .iter()
            .position(|word| rest.starts_with(word.as_bytes()))
            .map(|idx| idx as u32 + 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE_1: &str = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n";
    const EXAMPLE_2: &str = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n\
                             4nineeightseven2\nzoneight234\n7pqrstsixteen\n";

    #[test]
    fn test_part1_example() {
        let mut shared = Solver::parse(EXAMPLE_1).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "142");
    }

    #[test]
    fn test_part2_example() {
        let mut shared = Solver::parse(EXAMPLE_2).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "281");
    }

    #[test]
    fn test_overlapping_words() {
        assert_eq!(calibration_sum(&["eightwo"], true).unwrap(), "82");
        assert_eq!(calibration_sum(&["oneight"], true).unwrap(), "18");
    }

    #[test]
    fn test_line_without_digit_fails() {
        let err = calibration_sum(&["12", "abc"], false).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            Solver::parse("\n\n"),
            Err(ParseError::MissingData(_))
        ));
    }

    proptest! {
        /// Letters around the digits never change the calibration value
        #[test]
        fn prop_calibration_ignores_filler(
            first in 1u32..=9,
            last in 1u32..=9,
            prefix in "[xyz]{0,5}",
            middle in "[xyz]{0,5}",
            suffix in "[xyz]{0,5}",
        ) {
            let line = format!("{}{}{}{}{}", prefix, first, middle, last, suffix);
            let expected = (first * 10 + last).to_string();
            prop_assert_eq!(calibration_sum(&[line.as_str()], false).unwrap(), expected.clone());
            prop_assert_eq!(calibration_sum(&[line.as_str()], true).unwrap(), expected);
        }
    }
}

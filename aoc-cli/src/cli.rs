//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Advent of Code timed runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers and time each part", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Only run this part
    #[arg(
        short,
        long,
        value_parser = clap::value_parser!(u8).range(1..=2),
        conflicts_with_all = ["skip_part1", "skip_part2"]
    )]
    pub part: Option<u8>,

    /// Do not run part 1
    #[arg(long)]
    pub skip_part1: bool,

    /// Do not run part 2
    #[arg(long)]
    pub skip_part2: bool,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding inputs as `{year}/day{day:02}.txt`
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Input file for a single selected day, instead of the input directory
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Print both part timings on one line
    #[arg(long)]
    pub combine_timings: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_full() {
        let args = Args::try_parse_from([
            "aoc", "-y", "2023", "-d", "14", "-p", "2", "-t", "grid,cycle", "-vv",
        ])
        .unwrap();

        assert_eq!(args.year, Some(2023));
        assert_eq!(args.day, Some(14));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["grid", "cycle"]);
        assert_eq!(args.verbose, 2);
        assert!(!args.combine_timings);
    }

    #[test]
    fn test_day_out_of_range_rejected() {
        assert!(Args::try_parse_from(["aoc", "-d", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "-p", "3"]).is_err());
    }

    #[test]
    fn test_part_conflicts_with_skip() {
        assert!(Args::try_parse_from(["aoc", "-p", "1", "--skip-part2"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--skip-part1", "--skip-part2"]).is_ok());
    }
}

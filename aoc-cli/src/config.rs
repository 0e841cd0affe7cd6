//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_solver::{PartSelection, ReportLayout, TimingStyle};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Parts to run for each day
    pub selection: PartSelection,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory of `{year}/day{day:02}.txt` inputs
    pub input_dir: PathBuf,
    /// Explicit input file, only valid when a single day is selected
    pub input_file: Option<PathBuf>,
    /// Report formatting
    pub layout: ReportLayout,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let selection = match args.part {
            Some(part) => PartSelection::only(part),
            None => PartSelection {
                part1: !args.skip_part1,
                part2: !args.skip_part2,
            },
        };

        let input_file = args.input.as_deref().map(expand_tilde);
        if input_file.is_some() && args.day.is_none() {
            return Err(CliError::Config(
                "--input needs --day to pick the solver it belongs to".to_string(),
            ));
        }

        let timing_style = if args.combine_timings {
            TimingStyle::Combined
        } else {
            TimingStyle::PerLine
        };

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            selection,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_file,
            layout: ReportLayout { timing_style },
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

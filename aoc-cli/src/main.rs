//! AOC CLI - times Advent of Code solvers and prints a report per day

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod logging;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::{ConsoleSink, RegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;

fn main() {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Check for missing inputs before anything runs
    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        eprintln!("Missing {} input file(s):", missing.len());
        for (year, day, path) in &missing {
            eprintln!("  - {}/day{:02}: {}", year, day, path.display());
        }
        return Err(error::CliError::MissingInputs(missing.len()));
    }

    for work in &work_items {
        tracing::info!(year = work.year, day = work.day, parts = work.parts, "selected");
    }

    let days = executor.execute(&work_items, &mut ConsoleSink)?;

    for day in &days {
        let total_ms: f64 = day.reports.iter().map(|r| r.elapsed_ms()).sum();
        tracing::info!(
            year = day.year,
            day = day.day,
            parts = day.reports.len(),
            total_ms,
            "finished"
        );
    }

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

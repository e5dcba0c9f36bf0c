//! AOC CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::{SolverPlugin, SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the `-v` count
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    tracing::debug!(?config, "resolved configuration");

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;

    let executor =
        Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    if config.list {
        list_solvers(&work_items, &config.tags);
        return Ok(());
    }

    run_executor(executor, &work_items, config.quiet)
}

/// Print the matching solvers with their parts and tags
fn list_solvers(work_items: &[executor::WorkItem], tags: &[String]) {
    for work in work_items {
        let plugin_tags = aoc_solver::inventory::iter::<SolverPlugin>()
            .find(|p| p.year == work.year && p.day == work.day && plugin_matches(p, tags))
            .map(|p| p.tags.join(", "))
            .unwrap_or_default();
        println!(
            "{}/{:02} parts {}-{} [{}]",
            work.year,
            work.day,
            work.parts.start(),
            work.parts.end(),
            plugin_tags
        );
    }
}

/// Run the executor and print results in order as they become ready
fn run_executor(
    executor: Executor,
    work_items: &[executor::WorkItem],
    quiet: bool,
) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |p| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part: p,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();

    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        tracing::warn!("not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results);

    Ok(())
}

fn plugin_matches(plugin: &SolverPlugin, tags: &[String]) -> bool {
    tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin_matches(plugin, tags))?
        .build();
    tracing::debug!(solvers = registry.storage().len(), ?tags, "registry built");
    Ok(registry)
}

//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver jam <board.txt|board.json>
//!   puzzle-solver jam --stdin
//!   puzzle-solver strings <START> <FINISH>
//!   puzzle-solver crossing <PUPS> <WOLVES>
//!
//! Options:
//!   --json        Print the report as JSON
//!   -v, -vv, -vvv Log more detail to stderr

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing::{info, warn, Level};

use puzzle_solver::{
    load_board, load_board_str, solve, Configuration, CrossingConfig, SolverResult, StringsConfig,
};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Breadth-first shortest-path solver for small puzzles")]
#[command(version)]
struct Cli {
    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log verbosity (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Slide the X car to the edge of a traffic jam board
    Jam {
        /// Path to a board description, text or JSON
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the board from stdin instead of a file
        #[arg(long)]
        stdin: bool,
    },

    /// Rotate letters of START one at a time until it reads FINISH
    Strings {
        start: String,
        finish: String,
    },

    /// Ferry pups and wolves across the river
    Crossing {
        pups: u32,
        wolves: u32,
    },
}

/// Output format for a solve
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    total_configurations: usize,
    unique_configurations: usize,
    time_elapsed_ms: u64,
    start: String,
    path: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;

    match cli.command {
        Commands::Jam { file, stdin } => {
            let (name, board) = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("failed to read board from stdin")?;
                ("<stdin>".to_string(), load_board_str(&buffer)?)
            } else if let Some(path) = file {
                let board = load_board(&path)
                    .with_context(|| format!("failed to load board {}", path.display()))?;
                (path.display().to_string(), board)
            } else {
                bail!("must provide either a board file or --stdin");
            };
            info!(
                rows = board.rows(),
                cols = board.cols(),
                cars = board.cars().len(),
                "loaded board"
            );
            run(&format!("File: {name}"), board, json)
        }

        Commands::Strings { start, finish } => {
            let config = StringsConfig::new(&start, &finish)?;
            run(&format!("Start: {start}, End: {finish}"), config, json)
        }

        Commands::Crossing { pups, wolves } => {
            let config = CrossingConfig::new(pups, wolves);
            run(&format!("Pups: {pups} Wolves: {wolves}"), config, json)
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run<C: Configuration>(header: &str, start: C, json: bool) -> anyhow::Result<()> {
    let result = solve(start.clone());
    if !result.is_found() {
        warn!(
            unique_visited = result.unique_visited,
            "search space exhausted without reaching a goal"
        );
    }

    if json {
        let output = format_result(&start, &result);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(header, &start, &result);
    }
    Ok(())
}

fn format_result<C: Configuration>(start: &C, result: &SolverResult<C>) -> SolveOutput {
    SolveOutput {
        found: result.is_found(),
        moves: result.moves(),
        total_configurations: result.total_generated,
        unique_configurations: result.unique_visited,
        time_elapsed_ms: result.time_elapsed_ms,
        start: start.to_string(),
        path: result
            .path
            .iter()
            .flatten()
            .map(|config| config.to_string())
            .collect(),
    }
}

fn print_report<C: Configuration>(header: &str, start: &C, result: &SolverResult<C>) {
    println!("Total Configurations: {}", result.total_generated);
    println!("Unique Configurations: {}", result.unique_visited);
    println!("{header}");
    println!("{start}");

    let Some(path) = &result.path else {
        println!("No path was found...");
        return;
    };
    for (step, config) in path.iter().enumerate() {
        let rendered = config.to_string();
        if rendered.contains('\n') {
            println!("Step {step}:\n{rendered}");
        } else {
            println!("Step {step}: {rendered}");
        }
    }
}

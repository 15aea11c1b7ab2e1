// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `workflow-regions` - sort the parts in an input file and count every
//! accepted rating combination.
//!
//! **Usage:**
//! ```text
//! workflow-regions [--root <LABEL>] [--min <N>] [--max <N>] [--sequential] [--show-region] [-v...] <INPUT>
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use workflow_regions::config::DEFAULT_ROOT;
use workflow_regions::{Config, Domain, Puzzle};

/// Classify parts through workflows and count all accepted combinations.
#[derive(Parser)]
#[command(name = "workflow-regions", about = "Sort parts through rule workflows")]
struct Args {
    /// Input file: workflows, a blank line, then parts.
    input: PathBuf,

    /// Label of the first workflow.
    #[arg(long, default_value = DEFAULT_ROOT)]
    root: String,

    /// Smallest legal rating.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    min: i64,

    /// Largest legal rating.
    #[arg(long, default_value_t = 4000, allow_negative_numbers = true)]
    max: i64,

    /// Classify parts on a single thread.
    #[arg(long)]
    sequential: bool,

    /// Print the accepted region.
    #[arg(long)]
    show_region: bool,

    /// Log more (-v for info, -vv for debug, -vvv for trace). RUST_LOG applies when absent.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let domain = Domain::new(args.min, args.max)?;
    let mut config = Config::default().with_root(&args.root).with_domain(domain);
    if args.sequential {
        config = config.sequential();
    }

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let puzzle = Puzzle::parse(&text, domain)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;
    let report = puzzle.solve(&config)?;

    println!("{}", report);
    if args.show_region {
        println!("Accepting {}", report.accepted);
    }
    Ok(())
}

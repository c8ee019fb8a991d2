//! Convergence-time plotter for the peer-to-peer convergence experiment.
//!
//! A one-shot batch reporter: reads `convergence_summary.csv` from the
//! working directory, aggregates success times per peer count, and renders
//! `convergence_time.png` with the average, min-max range, and standard
//! deviation of convergence time.
//!
//! Exit codes:
//!   0 - Success (chart written)
//!   1 - Runtime error (chart backend unavailable, missing or empty input,
//!       malformed row)

mod aggregate;
mod chart;
mod error;
mod model;
mod stats;

use anyhow::Result;
use error::InputProblem;
use model::{OUTPUT_FILE, SUMMARY_FILE};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    if let Err(e) = run() {
        // One advisory line per failure mode, then a non-zero exit.
        println!("{e}");
        std::process::exit(1);
    }
}

/// Initialize logging. Diagnostics are opt-in via `RUST_LOG`; a normal run
/// prints nothing but the final status line.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Run the complete plotting pipeline: probe, aggregate, summarize, render.
fn run() -> Result<()> {
    // Probe the chart backend before touching the input file, so a broken
    // host is reported ahead of any file I/O.
    chart::probe_backend()?;

    let summary_path = Path::new(SUMMARY_FILE);
    let groups = aggregate::aggregate(summary_path)?;

    let rows = stats::summarize(&groups);
    if rows.is_empty() {
        return Err(InputProblem::NoUsableRows {
            path: summary_path.to_path_buf(),
        }
        .into());
    }
    debug!(groups = rows.len(), "computed per-group statistics");

    chart::render(Path::new(OUTPUT_FILE), &rows)?;
    println!("Saved plot to {OUTPUT_FILE}");
    Ok(())
}

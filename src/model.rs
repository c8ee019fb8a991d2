//! Data models for the convergence plotter.
//!
//! This module contains the row shape read from the summary file and the
//! per-group statistics derived from it, plus the two fixed file names that
//! make up the tool's entire external interface.

use serde::Deserialize;

/// Fixed name of the input summary written by the experiment harness,
/// resolved relative to the working directory.
pub const SUMMARY_FILE: &str = "convergence_summary.csv";

/// Fixed name of the rendered chart, overwritten on every run.
pub const OUTPUT_FILE: &str = "convergence_time.png";

/// One row of the experiment summary.
///
/// Only `n` and `time_seconds` are read; extra columns in the file are
/// ignored by the CSV reader.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRow {
    /// Number of peers in the run.
    pub n: u32,
    /// Elapsed seconds until convergence. Negative is the timeout sentinel,
    /// not a real duration.
    pub time_seconds: f64,
}

impl SummaryRow {
    /// A run counts toward the statistics only when it actually converged.
    pub fn is_success(&self) -> bool {
        self.time_seconds >= 0.0
    }
}

/// Statistics derived from the success times of one peer count.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    /// Number of peers this group describes.
    pub n: u32,
    /// Arithmetic mean of the success times.
    pub mean: f64,
    /// Fastest success time.
    pub min: f64,
    /// Slowest success time.
    pub max: f64,
    /// Population standard deviation (divisor N); 0.0 for a single sample.
    pub stddev: f64,
}

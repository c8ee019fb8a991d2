//! Error taxonomy for the plotting pipeline.
//!
//! Every variant is terminal for the run: nothing is retried, and `main`
//! turns the error into a single advisory line on stdout plus exit code 1.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a plotting run.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The chart backend could not be initialized. Raised by the startup
    /// probe, before the input file is touched.
    #[error(
        "chart backend unavailable: {reason}. \
         Install a system font stack (e.g. fontconfig and the DejaVu fonts) and re-run."
    )]
    DependencyUnavailable { reason: String },

    /// The summary file is missing, or it held no usable rows.
    #[error(transparent)]
    InputMissingOrEmpty(#[from] InputProblem),

    /// A row could not be parsed (missing column or non-numeric value).
    /// Fatal for the invocation; there is no partial-row recovery.
    #[error("malformed row in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The summary file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Drawing or encoding the chart image failed.
    #[error("failed to render chart: {0}")]
    Render(String),
}

/// Sub-reason for [`PlotError::InputMissingOrEmpty`], kept separate so the
/// advisory line tells the operator which situation they are in.
#[derive(Debug, Error)]
pub enum InputProblem {
    #[error("{path} not found. Run the convergence experiment first to produce it.")]
    FileMissing { path: PathBuf },

    #[error(
        "no usable data found in {path}: every row was a timeout, or the file had no data rows."
    )]
    NoUsableRows { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_input_problem_messages_are_distinguishable() {
        let path = Path::new("convergence_summary.csv").to_path_buf();
        let missing = PlotError::from(InputProblem::FileMissing { path: path.clone() });
        let empty = PlotError::from(InputProblem::NoUsableRows { path });

        assert!(missing.to_string().contains("not found"));
        assert!(empty.to_string().contains("no usable data"));
        assert_ne!(missing.to_string(), empty.to_string());
    }
}

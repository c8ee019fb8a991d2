//! Summary-file aggregation.
//!
//! Reads the experiment summary and groups success times by peer count.
//! Timeout rows never contribute to any statistic.

use crate::error::{InputProblem, PlotError};
use crate::model::SummaryRow;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Success times keyed by peer count, iterable in ascending `n` order.
pub type Groups = BTreeMap<u32, Vec<f64>>;

/// Read the summary file and group success times by `n`.
///
/// Rows with a negative `time_seconds` (timeouts) are skipped entirely.
/// A malformed row aborts the run; there is no partial-row recovery.
pub fn aggregate(path: &Path) -> Result<Groups, PlotError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PlotError::from(InputProblem::FileMissing {
            path: path.to_path_buf(),
        }),
        _ => PlotError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut groups = Groups::new();
    let mut timeouts = 0usize;

    for row in reader.deserialize::<SummaryRow>() {
        let row = row.map_err(|source| PlotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if row.is_success() {
            groups.entry(row.n).or_default().push(row.time_seconds);
        } else {
            timeouts += 1;
        }
    }

    debug!(groups = groups.len(), timeouts, "aggregated summary rows");
    Ok(groups)
}

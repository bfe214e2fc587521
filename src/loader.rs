//! Filesystem discovery and loading of trial records.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::trial::{flatten, parse_allow_list, Row, TrialRecord};

/// Filename the tuner writes for every trial, matched at any depth.
pub const TRIAL_FILE_NAME: &str = "trial.json";

/// Recursively collect every `trial.json` under `root`.
///
/// Paths are returned in traversal order, which follows the filesystem and
/// is not sorted.
///
/// # Errors
///
/// Returns [`Error::Walk`] if `root` does not exist or any directory in the
/// tree cannot be read.
pub fn discover_trial_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| Error::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && entry.file_name() == TRIAL_FILE_NAME {
            paths.push(entry.into_path());
        }
    }
    trace_debug!(root = %root.display(), files = paths.len(), "discovered trial files");
    Ok(paths)
}

/// Read and deserialize a single trial file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or
/// [`Error::MalformedTrial`] if it is not valid JSON or lacks a required
/// field.
pub fn read_trial_file(path: impl AsRef<Path>) -> Result<TrialRecord> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| Error::MalformedTrial {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every trial under `root` into flattened rows.
///
/// `allow_list` is an optional comma-separated list of hyperparameter
/// names; see [`flatten`] for the exact key-selection rules. The
/// filesystem is re-read on every call, and row order follows traversal
/// order — compare result sets, not sequences, when checking idempotence.
///
/// # Errors
///
/// Fails on the first unreadable or malformed trial file; there is no
/// partial-dataset recovery.
pub fn load_trials(root: impl AsRef<Path>, allow_list: Option<&str>) -> Result<Vec<Row>> {
    let allowed = allow_list.map(parse_allow_list).unwrap_or_default();

    let mut rows = Vec::new();
    for path in discover_trial_files(root)? {
        let record = read_trial_file(&path)?;
        rows.push(flatten(&record, &allowed));
    }
    trace_info!(rows = rows.len(), "loaded trial rows");
    Ok(rows)
}

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a trial file or CSV file cannot be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Returned when directory traversal fails, including a missing or
    /// unreadable root directory.
    #[error("failed to scan {}: {source}", path.display())]
    Walk {
        /// The root directory being scanned.
        path: PathBuf,
        /// The underlying traversal error.
        #[source]
        source: walkdir::Error,
    },

    /// Returned when a trial file is not valid JSON or is missing a
    /// required field (`trial_id`, `score`, `hyperparameters.values`).
    #[error("malformed trial file {}: {source}", path.display())]
    MalformedTrial {
        /// The offending trial file.
        path: PathBuf,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Returned when CSV input cannot be parsed.
    #[error("malformed csv input: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

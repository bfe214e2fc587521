//! Dashboard configuration: where to scan and what to keep.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::loader::load_trials;
use crate::table::Table;
use crate::trial::Row;

/// Configuration for one dashboard data source, with a fluent API.
///
/// The scan root is `project_dir`, optionally extended with a
/// `project_name` and a `search_dir` to address one search inside a
/// larger results tree. Setting a `csv_path` bypasses JSON discovery
/// entirely and reads that file instead.
///
/// # Examples
///
/// ```
/// use tuner_dashboard::DashboardConfig;
///
/// let config = DashboardConfig::new("./results")
///     .project_name("mnist")
///     .search_dir("hyperband_search_00")
///     .allow_list("units,learning_rate");
///
/// assert_eq!(
///     config.results_path(),
///     std::path::Path::new("./results/mnist/hyperband_search_00"),
/// );
/// ```
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    project_dir: PathBuf,
    project_name: Option<String>,
    search_dir: Option<String>,
    allow_list: Option<String>,
    csv_path: Option<PathBuf>,
}

impl DashboardConfig {
    /// Create a configuration rooted at `project_dir`.
    #[must_use]
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            project_name: None,
            search_dir: None,
            allow_list: None,
            csv_path: None,
        }
    }

    /// Name of the project subdirectory inside the project dir.
    #[must_use]
    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Name of the search subdirectory inside the project.
    #[must_use]
    pub fn search_dir(mut self, dir: impl Into<String>) -> Self {
        self.search_dir = Some(dir.into());
        self
    }

    /// Comma-separated hyperparameter names to keep when flattening.
    ///
    /// Without an allow-list every hyperparameter except the reserved
    /// tuner key is kept. See [`flatten`](crate::flatten).
    #[must_use]
    pub fn allow_list(mut self, allow_list: impl Into<String>) -> Self {
        self.allow_list = Some(allow_list.into());
        self
    }

    /// Read trial data from this CSV file instead of scanning for
    /// `trial.json` files. The CSV columns are used as-is.
    #[must_use]
    pub fn csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    /// The directory that will be scanned for trial files:
    /// `project_dir[/project_name][/search_dir]`.
    #[must_use]
    pub fn results_path(&self) -> PathBuf {
        let mut path = self.project_dir.clone();
        if let Some(name) = &self.project_name {
            path.push(name);
        }
        if let Some(dir) = &self.search_dir {
            path.push(dir);
        }
        path
    }

    /// The configured CSV bypass, if any.
    #[must_use]
    pub fn csv_path_ref(&self) -> Option<&Path> {
        self.csv_path.as_deref()
    }

    /// Load the flattened trial rows from the results directory.
    ///
    /// Ignores any configured CSV path.
    ///
    /// # Errors
    ///
    /// Propagates the first discovery, read, or parse failure.
    pub fn load_rows(&self) -> Result<Vec<Row>> {
        load_trials(self.results_path(), self.allow_list.as_deref())
    }

    /// Load a fresh table snapshot.
    ///
    /// With a CSV path configured the file is read directly; otherwise
    /// the results directory is scanned for trial files and the flattened
    /// rows are materialized column-wise. Each call re-reads the
    /// filesystem and fully replaces any previous snapshot.
    ///
    /// # Errors
    ///
    /// Propagates the first discovery, read, or parse failure.
    pub fn load_table(&self) -> Result<Table> {
        if let Some(csv_path) = &self.csv_path {
            return Table::from_csv_path(csv_path);
        }
        Ok(Table::from_rows(&self.load_rows()?))
    }
}

//! Trial records as written by the tuner, and their flattened row form.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tuner-internal hyperparameter key that mirrors the trial id. It is
/// bookkeeping for the search process, not a searched hyperparameter, and
/// is always excluded from full-dump rows.
pub const RESERVED_TRIAL_ID_KEY: &str = "tuner/trial_id";

/// One hyperparameter-search trial as stored on disk.
///
/// The on-disk document must contain `trial_id`, `score`, and
/// `hyperparameters.values`; anything else in the file is ignored. The
/// order of the `values` mapping is preserved as read.
///
/// # Examples
///
/// ```
/// use tuner_dashboard::TrialRecord;
///
/// let record: TrialRecord = serde_json::from_str(
///     r#"{"trial_id": "t1", "score": 0.9,
///         "hyperparameters": {"values": {"units": 32}}}"#,
/// ).unwrap();
/// assert_eq!(record.trial_id, "t1");
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct TrialRecord {
    /// Unique identifier of the trial.
    pub trial_id: String,
    /// Objective value the trial achieved.
    pub score: f64,
    /// The hyperparameter assignment the trial was run with.
    pub hyperparameters: Hyperparameters,
}

/// The hyperparameter section of a trial file.
#[derive(Clone, Debug, Deserialize)]
pub struct Hyperparameters {
    /// Hyperparameter name to value, in file order.
    pub values: serde_json::Map<String, Value>,
}

/// A scalar cell in a flattened row.
///
/// Variant order matters for untagged deserialization: `true` must become
/// `Bool`, `3` must become `Int`, `3.5` falls through to `Float`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A boolean hyperparameter value.
    Bool(bool),
    /// An integer hyperparameter value.
    Int(i64),
    /// A floating-point value (scores, learning rates).
    Float(f64),
    /// A string value (categorical hyperparameters, trial ids).
    String(String),
}

impl CellValue {
    /// Convert a JSON value into a cell, if it is a representable scalar.
    ///
    /// Nulls, arrays and objects have no scalar cell form and return `None`.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self::Int(i))
                } else {
                    n.as_f64().map(Self::Float)
                }
            }
            Value::String(s) => Some(Self::String(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// The numeric form of this cell, if it has one.
    ///
    /// Booleans map to `0.0`/`1.0`; strings have no numeric form.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(f64::from(u8::from(*b))),
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::String(_) => None,
        }
    }

    /// Truthiness as the tuner's reference tooling defines it: `false`,
    /// `0`, `0.0` and the empty string are falsy, everything else truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(s) => !s.is_empty(),
        }
    }
}

impl core::fmt::Display for CellValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// A flattened trial: `trial_id`, a subset of the hyperparameters, and
/// usually `score`, with keys unique and in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    entries: Vec<(String, CellValue)>,
}

impl Row {
    /// Create an empty row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a cell, replacing any existing cell under the same key so
    /// keys stay unique.
    pub fn insert(&mut self, key: impl Into<String>, value: CellValue) {
        let key = key.into();
        if let Some(index) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries[index].1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up a cell by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Key/cell pairs in insertion order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of cells in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a comma-separated allow-list into hyperparameter names.
///
/// Entries are trimmed; empty entries are dropped, so `""` and `", ,"`
/// both mean "no allow-list".
///
/// # Examples
///
/// ```
/// use tuner_dashboard::parse_allow_list;
///
/// assert_eq!(parse_allow_list("units, activation"), vec!["units", "activation"]);
/// assert!(parse_allow_list("").is_empty());
/// ```
#[must_use]
pub fn parse_allow_list(allow_list: &str) -> Vec<String> {
    allow_list
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Flatten a trial record into a single-level row.
///
/// With an empty `allow_list` every hyperparameter except
/// [`RESERVED_TRIAL_ID_KEY`] is copied in file order and `score` is always
/// appended. With a non-empty `allow_list` only the listed keys that are
/// present with truthy values are copied (still in file order, not
/// allow-list order), and `score` is appended only if the record's
/// hyperparameter mapping was non-empty. Both rules are carried over
/// verbatim from the tuner's reference tooling.
///
/// Null and non-scalar hyperparameter values are skipped in either mode.
///
/// # Examples
///
/// ```
/// use tuner_dashboard::{flatten, CellValue, TrialRecord};
///
/// let record: TrialRecord = serde_json::from_str(
///     r#"{"trial_id": "t1", "score": 0.9,
///         "hyperparameters": {"values": {"units": 32, "tuner/trial_id": "t1"}}}"#,
/// ).unwrap();
///
/// let row = flatten(&record, &[]);
/// assert_eq!(row.get("units"), Some(&CellValue::Int(32)));
/// assert_eq!(row.get("tuner/trial_id"), None);
/// assert_eq!(row.get("score"), Some(&CellValue::Float(0.9)));
/// ```
#[must_use]
pub fn flatten(record: &TrialRecord, allow_list: &[String]) -> Row {
    let mut row = Row::new();
    row.insert("trial_id", CellValue::String(record.trial_id.clone()));

    let values = &record.hyperparameters.values;
    if allow_list.is_empty() {
        for (key, value) in values {
            if key == RESERVED_TRIAL_ID_KEY {
                continue;
            }
            if let Some(cell) = CellValue::from_json(value) {
                row.insert(key.clone(), cell);
            }
        }
        row.insert("score", CellValue::Float(record.score));
    } else {
        for (key, value) in values {
            if !allow_list.iter().any(|name| name == key) {
                continue;
            }
            match CellValue::from_json(value) {
                Some(cell) if cell.is_truthy() => row.insert(key.clone(), cell),
                _ => {}
            }
        }
        // Inherited quirk: no score cell when the mapping itself is empty.
        if !values.is_empty() {
            row.insert("score", CellValue::Float(record.score));
        }
    }

    row
}

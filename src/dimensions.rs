//! Encode table columns into parallel-coordinates dimensions.

use std::collections::{BTreeSet, HashMap};

use crate::table::{Column, Table};
use crate::trial::CellValue;

/// Tick metadata for a category-encoded axis.
///
/// `tickvals[i]` is the code assigned to `ticktext[i]`; both are derived
/// from the same sorted assignment, so the alignment holds by
/// construction rather than by two independent sorts happening to agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ticks {
    /// Distinct category codes, ascending.
    pub tickvals: Vec<usize>,
    /// Distinct original string values, lexicographically ascending.
    pub ticktext: Vec<String>,
}

/// One axis of a parallel-coordinates plot.
///
/// Numeric columns carry their raw values; categorical columns carry
/// integer category codes plus [`Ticks`] mapping codes back to labels.
/// Missing cells become `NaN` so the plotting layer can drop them.
#[derive(Clone, Debug, PartialEq)]
pub struct Dimension {
    /// The column name.
    pub label: String,
    /// Per-row numeric values (raw or category codes).
    pub values: Vec<f64>,
    /// Tick metadata; `Some` only for categorical columns.
    pub ticks: Option<Ticks>,
}

/// Build one [`Dimension`] per table column, preserving column order.
///
/// Numeric columns pass through unchanged. Categorical columns are
/// encoded by sorted rank: the lexicographically smallest distinct value
/// gets code 0, the next 1, and so on.
///
/// # Examples
///
/// ```
/// use tuner_dashboard::{build_dimensions, CellValue, Column, Table};
///
/// let color = |s: &str| Some(CellValue::String(s.into()));
/// let column = Column::new("color", vec![color("red"), color("blue"), color("red"), color("green")]);
/// let dims = build_dimensions(&Table::from_columns(vec![column]));
///
/// let ticks = dims[0].ticks.as_ref().unwrap();
/// assert_eq!(ticks.ticktext, ["blue", "green", "red"]);
/// assert_eq!(ticks.tickvals, [0, 1, 2]);
/// assert_eq!(dims[0].values, [2.0, 0.0, 2.0, 1.0]);
/// ```
#[must_use]
pub fn build_dimensions(table: &Table) -> Vec<Dimension> {
    let dimensions = table.columns().iter().map(encode_column).collect();
    trace_debug!(columns = table.n_cols(), "built plot dimensions");
    dimensions
}

fn encode_column(column: &Column) -> Dimension {
    if column.is_categorical() {
        encode_categorical(column)
    } else {
        Dimension {
            label: column.name().to_string(),
            values: column
                .cells()
                .iter()
                .map(|cell| {
                    cell.as_ref()
                        .and_then(CellValue::as_f64)
                        .unwrap_or(f64::NAN)
                })
                .collect(),
            ticks: None,
        }
    }
}

/// Category codes are assigned by sorted rank over the distinct display
/// strings, so ticks come straight from the assignment itself.
#[allow(clippy::cast_precision_loss)]
fn encode_categorical(column: &Column) -> Dimension {
    let distinct: BTreeSet<String> = column
        .cells()
        .iter()
        .flatten()
        .map(ToString::to_string)
        .collect();
    let ticktext: Vec<String> = distinct.into_iter().collect();

    let code_of: HashMap<&str, usize> = ticktext
        .iter()
        .enumerate()
        .map(|(code, text)| (text.as_str(), code))
        .collect();

    let values = column
        .cells()
        .iter()
        .map(|cell| match cell {
            Some(value) => code_of
                .get(value.to_string().as_str())
                .map_or(f64::NAN, |&code| code as f64),
            None => f64::NAN,
        })
        .collect();

    Dimension {
        label: column.name().to_string(),
        values,
        ticks: Some(Ticks {
            tickvals: (0..ticktext.len()).collect(),
            ticktext,
        }),
    }
}

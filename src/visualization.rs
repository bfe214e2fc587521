//! HTML report generation for trial results.
//!
//! Generate a self-contained HTML file with an embedded
//! [Plotly.js](https://plotly.com/javascript/) parallel-coordinates chart
//! and a plain data table of the loaded trials.
//!
//! The chart is built from the same [`Dimension`] list the library exposes
//! programmatically: numeric axes carry raw values, categorical axes carry
//! category codes with their tick labels. Lines are colored by the `score`
//! column when one is present.
//!
//! # Usage
//!
//! Call [`Table::export_html()`](crate::Table::export_html) or
//! [`generate_html_report()`] directly:
//!
//! ```no_run
//! use tuner_dashboard::prelude::*;
//!
//! let table = DashboardConfig::new("./hyperband_search_00").load_table()?;
//! generate_html_report(&table, "report.html")?;
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! The output is a single HTML file that can be opened in any browser.
//! An internet connection is needed on first load to fetch `Plotly.js`
//! from a CDN. The report is regenerated wholesale on every call, never
//! diffed.

use core::fmt::Write as _;
use std::path::Path;

use crate::dimensions::{build_dimensions, Dimension};
use crate::table::Table;

/// Generate an HTML report for a table of trial results.
///
/// Creates a self-contained HTML file at `path` with a
/// parallel-coordinates chart (one axis per column) and a data table (one
/// row per trial). An empty table produces a report with no chart.
///
/// This is also available as [`Table::export_html()`](crate::Table::export_html).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn generate_html_report(table: &Table, path: impl AsRef<Path>) -> std::io::Result<()> {
    let html = build_html(table);
    trace_info!(bytes = html.len(), "writing html report");
    std::fs::write(path, html)
}

fn build_html(table: &Table) -> String {
    let mut html = String::with_capacity(8192);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Trial Results</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
  * {{ margin: 0; padding: 0; box-sizing: border-box; }}
  body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         background: #fff; color: #2c3e50; padding: 24px; }}
  h1 {{ text-align: center; margin-bottom: 8px; font-size: 1.8em; }}
  .subtitle {{ text-align: center; color: #7f8c8d; margin-bottom: 24px; }}
  .chart {{ background: #fff; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.08);
            margin-bottom: 24px; padding: 16px; }}
  .chart-title {{ font-size: 1.1em; font-weight: 600; margin-bottom: 8px; }}
  table {{ border-collapse: collapse; width: 100%; }}
  th, td {{ border: 1px solid #dfe4ea; padding: 6px 10px; text-align: left; font-size: 0.9em; }}
  th {{ background: #f5f6fa; }}
</style>
</head>
<body>
<h1>Trial Results</h1>
<p class="subtitle">{n} trials &middot; {c} columns</p>
"#,
        n = table.n_rows(),
        c = table.n_cols(),
    );

    if !table.is_empty() {
        html.push_str("<div class=\"chart\"><div class=\"chart-title\">Parallel Coordinates</div><div id=\"parcoords\"></div></div>\n");
        write_parallel_coordinates(&mut html, table);
    }

    html.push_str("<div class=\"chart\"><div class=\"chart-title\">Trials</div>\n");
    write_data_table(&mut html, table);
    html.push_str("</div>\n");

    html.push_str("</body>\n</html>\n");
    html
}

// ---------------------------------------------------------------------------
// Section generators
// ---------------------------------------------------------------------------

fn write_parallel_coordinates(html: &mut String, table: &Table) {
    let mut dimensions = String::new();
    for dimension in build_dimensions(table) {
        write_dimension(&mut dimensions, &dimension);
    }

    // Color lines by score where the table has one; gradient taken from
    // the tuner's original dashboard.
    let line = table
        .column("score")
        .filter(|column| !column.is_categorical())
        .map_or_else(String::new, |column| {
            let scores: Vec<f64> = column
                .cells()
                .iter()
                .map(|cell| {
                    cell.as_ref()
                        .and_then(crate::CellValue::as_f64)
                        .unwrap_or(f64::NAN)
                })
                .collect();
            format!(
                r#"line: {{ color: {scores:?},
           colorscale: [[0, "blue"], [0.25, "purple"], [0.5, "red"], [0.75, "orange"], [1, "gold"]] }},"#,
            )
        });

    let _ = write!(
        html,
        r#"<script>
Plotly.newPlot("parcoords", [{{
  type: "parcoords",
  {line}
  dimensions: [{dimensions}]
}}], {{ margin: {{ t: 30 }}, plot_bgcolor: "white", paper_bgcolor: "white" }},
   {{ responsive: true }});
</script>
"#,
    );
}

fn write_dimension(out: &mut String, dimension: &Dimension) {
    let label = escape_js(&dimension.label);
    let values = &dimension.values;
    match &dimension.ticks {
        Some(ticks) => {
            let ticktext: Vec<String> = ticks
                .ticktext
                .iter()
                .map(|text| format!("\"{}\"", escape_js(text)))
                .collect();
            let _ = write!(
                out,
                r#"{{ label: "{label}", values: {values:?}, tickvals: {tickvals:?}, ticktext: [{ticktext}] }},"#,
                tickvals = ticks.tickvals,
                ticktext = ticktext.join(","),
            );
        }
        None => {
            let _ = write!(out, r#"{{ label: "{label}", values: {values:?} }},"#);
        }
    }
}

fn write_data_table(html: &mut String, table: &Table) {
    html.push_str("<table id=\"datatable\">\n<thead><tr>");
    for column in table.columns() {
        let _ = write!(html, "<th>{}</th>", escape_html(column.name()));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for row_index in 0..table.n_rows() {
        html.push_str("<tr>");
        for column in table.columns() {
            match &column.cells()[row_index] {
                Some(cell) => {
                    let _ = write!(html, "<td>{}</td>", escape_html(&cell.to_string()));
                }
                None => html.push_str("<td></td>"),
            }
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

//! Integration tests for HTML report generation.

use tuner_dashboard::{generate_html_report, CellValue, Column, Row, Table};

fn sample_table() -> Table {
    let mut rows = Vec::new();
    for (id, units, activation, score) in [
        ("t1", 32, "relu", 0.9),
        ("t2", 64, "tanh", 0.5),
        ("t3", 32, "relu", 0.7),
    ] {
        let mut row = Row::new();
        row.insert("trial_id", CellValue::String(id.into()));
        row.insert("units", CellValue::Int(units));
        row.insert("activation", CellValue::String(activation.into()));
        row.insert("score", CellValue::Float(score));
        rows.push(row);
    }
    Table::from_rows(&rows)
}

#[test]
fn html_report_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    generate_html_report(&sample_table(), &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("<!DOCTYPE html>"));
    assert!(content.contains("plotly"));
}

#[test]
fn html_report_contains_chart_and_table_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    generate_html_report(&sample_table(), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("id=\"parcoords\""));
    assert!(content.contains("id=\"datatable\""));
    assert!(content.contains("Parallel Coordinates"));
    assert!(content.contains("3 trials"));
}

#[test]
fn html_report_emits_tick_metadata_for_categorical_axes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    generate_html_report(&sample_table(), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    // The activation axis carries codes plus the original labels.
    assert!(content.contains("ticktext: [\"relu\",\"tanh\"]"));
    assert!(content.contains("tickvals: [0, 1]"));
    // The numeric units axis has no tick metadata of its own, so its
    // dimension entry must not mention ticktext.
    let units_dim = content
        .split("{ label: \"units\"")
        .nth(1)
        .and_then(|rest| rest.split("},").next())
        .unwrap();
    assert!(!units_dim.contains("ticktext"));
}

#[test]
fn html_report_colors_lines_by_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    generate_html_report(&sample_table(), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("line: { color: [0.9, 0.5, 0.7]"));
    assert!(content.contains("\"purple\""));
    assert!(content.contains("\"gold\""));
}

#[test]
fn html_report_without_score_column_omits_line_color() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    let table = Table::from_columns(vec![Column::new(
        "units",
        vec![Some(CellValue::Int(32))],
    )]);
    generate_html_report(&table, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(!content.contains("line: {"));
    assert!(content.contains("id=\"parcoords\""));
}

#[test]
fn html_report_escapes_labels_and_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    let table = Table::from_columns(vec![Column::new(
        "a\"b",
        vec![Some(CellValue::String("<script>".into()))],
    )]);
    generate_html_report(&table, &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(content.contains("label: \"a\\\"b\""));
    assert!(content.contains("<td>&lt;script&gt;</td>"));
}

#[test]
fn empty_table_report_has_no_chart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");

    generate_html_report(&Table::from_rows(&[]), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert!(!content.contains("id=\"parcoords\""));
    assert!(content.contains("0 trials"));
}

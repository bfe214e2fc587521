//! Integration tests for column-oriented table assembly and CSV I/O.

use tuner_dashboard::{CellValue, Row, Table};

fn row(cells: &[(&str, CellValue)]) -> Row {
    let mut result = Row::new();
    for (key, value) in cells {
        result.insert(*key, value.clone());
    }
    result
}

#[test]
fn columns_follow_first_seen_key_order() {
    let rows = vec![
        row(&[
            ("trial_id", CellValue::String("t1".into())),
            ("units", CellValue::Int(32)),
            ("score", CellValue::Float(0.9)),
        ]),
        row(&[
            ("trial_id", CellValue::String("t2".into())),
            ("activation", CellValue::String("relu".into())),
            ("score", CellValue::Float(0.5)),
        ]),
    ];

    let table = Table::from_rows(&rows);
    let names: Vec<&str> = table.columns().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["trial_id", "units", "score", "activation"]);
}

#[test]
fn missing_keys_become_none_cells() {
    let rows = vec![
        row(&[("units", CellValue::Int(32))]),
        row(&[("activation", CellValue::String("relu".into()))]),
    ];

    let table = Table::from_rows(&rows);
    let units = table.column("units").unwrap();
    assert_eq!(units.cells(), [Some(CellValue::Int(32)), None]);
    let activation = table.column("activation").unwrap();
    assert_eq!(
        activation.cells(),
        [None, Some(CellValue::String("relu".into()))]
    );
}

#[test]
fn empty_rows_make_empty_table() {
    let table = Table::from_rows(&[]);
    assert!(table.is_empty());
    assert_eq!(table.n_rows(), 0);
    assert_eq!(table.n_cols(), 0);
}

#[test]
fn column_with_any_string_is_categorical() {
    let rows = vec![
        row(&[("mixed", CellValue::Int(1))]),
        row(&[("mixed", CellValue::String("two".into()))]),
    ];
    let table = Table::from_rows(&rows);
    assert!(table.column("mixed").unwrap().is_categorical());
}

#[test]
fn numeric_and_bool_columns_are_not_categorical() {
    let rows = vec![
        row(&[
            ("units", CellValue::Int(32)),
            ("dropout", CellValue::Float(0.1)),
            ("bias", CellValue::Bool(true)),
        ]),
        row(&[
            ("units", CellValue::Int(64)),
            ("dropout", CellValue::Float(0.2)),
            ("bias", CellValue::Bool(false)),
        ]),
    ];
    let table = Table::from_rows(&rows);
    for name in ["units", "dropout", "bias"] {
        assert!(!table.column(name).unwrap().is_categorical(), "{name}");
    }
}

#[test]
fn csv_reader_infers_column_types() {
    let csv = "trial_id,units,score\nt1,32,0.9\nt2,64,0.5\n";
    let table = Table::from_csv_reader(csv.as_bytes()).unwrap();

    assert_eq!(table.n_rows(), 2);
    assert!(table.column("trial_id").unwrap().is_categorical());
    assert!(!table.column("units").unwrap().is_categorical());
    assert_eq!(
        table.column("units").unwrap().cells(),
        [Some(CellValue::Int(32)), Some(CellValue::Int(64))]
    );
    assert_eq!(
        table.column("score").unwrap().cells(),
        [Some(CellValue::Float(0.9)), Some(CellValue::Float(0.5))]
    );
}

#[test]
fn csv_empty_cells_become_none() {
    let csv = "a,b\n1,\n,x\n";
    let table = Table::from_csv_reader(csv.as_bytes()).unwrap();
    assert_eq!(
        table.column("a").unwrap().cells(),
        [Some(CellValue::Int(1)), None]
    );
    assert_eq!(
        table.column("b").unwrap().cells(),
        [None, Some(CellValue::String("x".into()))]
    );
}

#[test]
fn csv_column_with_one_non_numeric_cell_is_all_strings() {
    let csv = "v\n1\ntwo\n3\n";
    let table = Table::from_csv_reader(csv.as_bytes()).unwrap();
    let column = table.column("v").unwrap();
    assert!(column.is_categorical());
    assert_eq!(
        column.cells(),
        [
            Some(CellValue::String("1".into())),
            Some(CellValue::String("two".into())),
            Some(CellValue::String("3".into())),
        ]
    );
}

#[test]
fn to_csv_writes_header_and_rows() {
    let rows = vec![
        row(&[
            ("trial_id", CellValue::String("t1".into())),
            ("units", CellValue::Int(32)),
            ("score", CellValue::Float(0.9)),
        ]),
        row(&[
            ("trial_id", CellValue::String("t2".into())),
            ("units", CellValue::Int(64)),
            ("score", CellValue::Float(0.5)),
        ]),
    ];
    let table = Table::from_rows(&rows);

    let mut buf = Vec::new();
    table.to_csv(&mut buf).unwrap();
    let csv = String::from_utf8(buf).unwrap();
    assert_eq!(csv, "trial_id,units,score\nt1,32,0.9\nt2,64,0.5\n");
}

#[test]
fn to_csv_escapes_commas_and_quotes() {
    let rows = vec![row(&[
        ("name", CellValue::String("a,b".into())),
        ("quoted", CellValue::String("say \"hi\"".into())),
    ])];
    let table = Table::from_rows(&rows);

    let mut buf = Vec::new();
    table.to_csv(&mut buf).unwrap();
    let csv = String::from_utf8(buf).unwrap();
    assert_eq!(csv, "name,quoted\n\"a,b\",\"say \"\"hi\"\"\"\n");
}

#[test]
fn csv_roundtrip_preserves_table() {
    let rows = vec![
        row(&[
            ("trial_id", CellValue::String("t1".into())),
            ("units", CellValue::Int(32)),
            ("activation", CellValue::String("relu".into())),
        ]),
        row(&[
            ("trial_id", CellValue::String("t2".into())),
            ("units", CellValue::Int(64)),
            ("activation", CellValue::String("tanh".into())),
        ]),
    ];
    let table = Table::from_rows(&rows);

    let mut buf = Vec::new();
    table.to_csv(&mut buf).unwrap();
    let reloaded = Table::from_csv_reader(buf.as_slice()).unwrap();
    assert_eq!(reloaded, table);
}

#[test]
fn export_csv_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trials.csv");

    let table = Table::from_rows(&[row(&[("units", CellValue::Int(32))])]);
    table.export_csv(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "units\n32\n");
}

use std::path::Path;

use gridform::core::schema::{
    default_fields, load_schema, save_schema, FieldDef, FieldKind,
};
use gridform::xlsx::{export_workbook, import_workbook};

// ============================================================================
// Helper Functions
// ============================================================================

fn row(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn sample_rows() -> Vec<Vec<String>> {
    vec![
        row(&["SKU1", "10", "first item", "5.00"]),
        row(&["SKU2", "3", "second item", "12.50"]),
        row(&["SKU1", "10", "first item", "5.00"]), // duplicate row on purpose
    ]
}

// ============================================================================
// Workbook Round-Trip
// ============================================================================

#[test]
fn test_export_then_import_preserves_rows_and_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.xlsx");
    let fields = default_fields();
    let rows = sample_rows();

    export_workbook(&path, &fields, &rows, "Records", 20.0).unwrap();
    let table = import_workbook(&path).unwrap();

    assert_eq!(table.rows.len(), rows.len());
    assert_eq!(table.rows, rows);
}

#[test]
fn test_import_regenerates_fields_from_header_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("headers.xlsx");
    let fields = default_fields();

    export_workbook(&path, &fields, &sample_rows(), "Records", 20.0).unwrap();
    let table = import_workbook(&path).unwrap();

    // Labels survive; names are re-derived from them; kinds collapse to
    // text because the workbook carries no type information.
    let labels: Vec<&str> = table.fields.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, vec!["Product reference", "Quantity", "Details", "Unit price"]);
    assert_eq!(table.fields[0].name, "product_reference");
    assert_eq!(table.fields[1].name, "quantity");
    assert!(table.fields.iter().all(|f| f.kind == FieldKind::Text));
}

#[test]
fn test_double_round_trip_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.xlsx");
    let second = dir.path().join("second.xlsx");
    let rows = sample_rows();

    export_workbook(&first, &default_fields(), &rows, "Records", 20.0).unwrap();
    let imported = import_workbook(&first).unwrap();

    export_workbook(&second, &imported.fields, &imported.rows, "Records", 20.0).unwrap();
    let reimported = import_workbook(&second).unwrap();

    assert_eq!(reimported.rows, imported.rows);
    assert_eq!(reimported.fields, imported.fields);
}

#[test]
fn test_export_empty_table_imports_as_zero_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.xlsx");

    export_workbook(&path, &default_fields(), &[], "Records", 20.0).unwrap();
    let table = import_workbook(&path).unwrap();

    assert_eq!(table.fields.len(), 4);
    assert!(table.rows.is_empty());
}

// ============================================================================
// Schema File + Workbook Interplay
// ============================================================================

#[test]
fn test_imported_schema_survives_a_schema_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let workbook_path = dir.path().join("data.xlsx");
    let schema_path = dir.path().join("schema.json");

    let fields = vec![
        FieldDef::new("color", "Color", FieldKind::Text),
        FieldDef::new("weight", "Weight (kg)", FieldKind::Number),
    ];
    export_workbook(
        &workbook_path,
        &fields,
        &[row(&["red", "1.5"])],
        "Records",
        20.0,
    )
    .unwrap();

    let imported = import_workbook(&workbook_path).unwrap();
    assert_eq!(imported.fields[1].name, "weight_kg");

    // Imports persist the synthesized schema; make sure it reloads intact.
    save_schema(&schema_path, &imported.fields).unwrap();
    assert_eq!(load_schema(Path::new(&schema_path)).unwrap(), imported.fields);
}

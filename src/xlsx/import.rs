//! Workbook import.
//!
//! Reads the first worksheet: row 0 becomes the new schema (labels from
//! cell text, names slugified from them, everything text-typed), every
//! following row of the used range becomes a record. Empty cells come back
//! as empty strings and rows are padded to the field count, so records stay
//! positionally aligned with the synthesized schema.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use log::info;

use crate::core::records::Row;
use crate::core::schema::{fields_from_labels, FieldDef, FieldKind};
use crate::xlsx::{WorkbookError, WorkbookResult};

/// The outcome of an import: a freshly synthesized schema plus the rows
/// read against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedTable {
    pub fields: Vec<FieldDef>,
    pub rows: Vec<Row>,
}

/// Read the first worksheet of the workbook at `path`.
pub fn import_workbook(path: &Path) -> WorkbookResult<ImportedTable> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(WorkbookError::NoSheets)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut row_iter = range.rows();
    let header = row_iter.next().ok_or(WorkbookError::NoHeaderRow)?;

    let labels = header.iter().enumerate().map(|(i, cell)| {
        let label = cell_to_string(cell);
        if label.is_empty() {
            (format!("Column {}", i + 1), FieldKind::Text)
        } else {
            (label, FieldKind::Text)
        }
    });
    let fields = fields_from_labels(labels);

    let rows: Vec<Row> = row_iter
        .map(|cells| {
            let mut row: Row = cells.iter().map(cell_to_string).collect();
            row.resize(fields.len(), String::new());
            row
        })
        .collect();

    info!(
        "Imported {} rows x {} columns from {} (sheet {:?})",
        rows.len(),
        fields.len(),
        path.display(),
        sheet_name
    );
    Ok(ImportedTable { fields, rows })
}

/// Raw text of a cell; empty string for blanks.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("{e:?}"),
        other => other.to_string(),
    }
}

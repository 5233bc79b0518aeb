//! # Workbook Codec
//!
//! Serializes the schema + record store to a styled `.xlsx` workbook and
//! reads one back. Writing goes through `rust_xlsxwriter`, reading through
//! `calamine`; styling is applied on export and ignored on import.
//!
//! Import is lossy by design: the header row only carries labels, so field
//! names are re-derived from them and every imported field is text-typed.

mod export;
mod import;

pub use export::export_workbook;
pub use import::{import_workbook, ImportedTable};

use thiserror::Error;

/// Result type for workbook operations.
pub type WorkbookResult<T> = std::result::Result<T, WorkbookError>;

/// Errors that can occur while writing or reading a workbook.
#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("workbook write error: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),

    #[error("workbook read error: {0}")]
    Read(#[from] calamine::Error),

    #[error("workbook has no worksheets")]
    NoSheets,

    #[error("worksheet has no header row")]
    NoHeaderRow,
}

//! # Application State
//!
//! Core business state for gridform. This module contains domain logic
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── fields: Vec<FieldDef>     // active schema, in column order
//! ├── records: Records          // in-memory rows
//! ├── selection: Selection      // which row the form is editing
//! ├── status_message: String    // status bar text
//! ├── notice: Option<Notice>    // pending modal dialog
//! ├── schema_path: PathBuf      // where the schema persists
//! ├── sheet_name: String        // worksheet name used on export
//! └── column_width: f64         // column width used on export
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::path::PathBuf;

use crate::core::config::ResolvedConfig;
use crate::core::records::Records;
use crate::core::schema::FieldDef;

/// Which row, if any, the entry form is currently editing.
///
/// `Row(i)` means the form was pre-populated from row `i` and the next
/// submit replaces that row instead of appending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Row(usize),
}

impl Selection {
    pub fn row(&self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Row(i) => Some(*i),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

/// A blocking message dialog. The TUI renders it as a modal overlay and
/// swallows all input until it is dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.into(),
        }
    }
}

pub struct App {
    pub fields: Vec<FieldDef>,
    pub records: Records,
    pub selection: Selection,
    pub status_message: String,
    pub notice: Option<Notice>,
    pub schema_path: PathBuf,
    pub sheet_name: String,
    pub column_width: f64,
}

impl App {
    pub fn new(fields: Vec<FieldDef>, config: &ResolvedConfig) -> Self {
        Self {
            fields,
            records: Records::new(),
            selection: Selection::None,
            status_message: String::from("Welcome to gridform!"),
            notice: None,
            schema_path: config.schema_path.clone(),
            sheet_name: config.sheet_name.clone(),
            column_width: config.column_width,
        }
    }

}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to gridform!");
        assert_eq!(app.fields.len(), 4);
        assert!(app.records.is_empty());
        assert_eq!(app.selection.row(), None);
        assert!(app.notice.is_none());
    }
}

//! # Actions
//!
//! Everything that can happen in gridform becomes an `Action`.
//! User submits the form? That's `Action::SubmitForm(values)`.
//! A workbook finished loading? That's `Action::ImportLoaded {..}`.
//!
//! The `update()` function takes the current state and an action, then
//! mutates the state and returns an `Effect` for the caller to run. No
//! I/O here. Disk writes happen in the TUI loop.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: dispatch an action, assert on the
//! resulting `App` and `Effect`.

use log::{debug, info, warn};

use crate::core::records::Row;
use crate::core::schema::FieldDef;
use crate::core::state::{App, Notice, Selection};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The entry form was submitted. Appends a row, or replaces the
    /// selected row when one is selected.
    SubmitForm(Vec<String>),
    /// The user picked a visible row to edit.
    SelectRow(usize),
    /// Drop the selection without touching any row.
    ClearSelection,
    /// Delete the selected row.
    DeleteSelected,
    /// The schema editor saved a new schema.
    ApplySchema(Vec<FieldDef>),
    /// A workbook import finished; replace schema and records.
    ImportLoaded { fields: Vec<FieldDef>, rows: Vec<Row> },
    Quit,
}

/// Side effects the TUI loop must carry out after an `update()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Persist `app.fields` to the schema file.
    SaveSchema,
    /// A submit or delete succeeded; reset the entry form.
    ClearForm,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SubmitForm(values) => submit_form(app, values),

        Action::SelectRow(index) => {
            if index < app.records.len() {
                app.selection = Selection::Row(index);
                app.status_message = format!("Editing row {}", index + 1);
                debug!("Selected row {index}");
            }
            Effect::None
        }

        Action::ClearSelection => {
            app.selection = Selection::None;
            app.status_message = String::from("Selection cleared");
            Effect::None
        }

        Action::DeleteSelected => delete_selected(app),

        Action::ApplySchema(fields) => {
            info!("Applying customized schema with {} fields", fields.len());
            app.fields = fields;
            app.records.resize_rows(app.fields.len());
            app.selection = Selection::None;
            app.status_message = format!("Schema saved ({} fields)", app.fields.len());
            app.notice = Some(Notice::success("The form has been customized."));
            Effect::SaveSchema
        }

        Action::ImportLoaded { fields, rows } => {
            info!(
                "Imported {} rows across {} fields",
                rows.len(),
                fields.len()
            );
            let count = rows.len();
            app.fields = fields;
            app.records.replace_all(rows);
            app.selection = Selection::None;
            app.status_message = format!("Imported {count} rows");
            app.notice = Some(Notice::success(
                "Data imported and the form updated from the workbook.",
            ));
            Effect::SaveSchema
        }

        Action::Quit => Effect::Quit,
    }
}

/// Every field of a submission must carry a value.
fn values_complete(values: &[String]) -> bool {
    values.iter().all(|v| !v.is_empty())
}

fn submit_form(app: &mut App, values: Vec<String>) -> Effect {
    if !values_complete(&values) {
        warn!("Submit rejected: empty field value");
        app.notice = Some(Notice::warning("Please fill in all the fields."));
        return Effect::None;
    }

    match app.selection {
        Selection::None => {
            app.records.add(values);
            app.status_message = format!("Row added ({} total)", app.records.len());
            debug!("Row appended, count={}", app.records.len());
            Effect::ClearForm
        }
        Selection::Row(index) => {
            if !app.records.update(index, values) {
                // Stale selection; should not happen since deletes clear it.
                warn!("Update rejected: selected row {index} no longer exists");
                app.selection = Selection::None;
                app.notice = Some(Notice::warning("The selected row no longer exists."));
                return Effect::None;
            }
            app.selection = Selection::None;
            app.status_message = format!("Row {} updated", index + 1);
            Effect::ClearForm
        }
    }
}

fn delete_selected(app: &mut App) -> Effect {
    let Selection::Row(index) = app.selection else {
        warn!("Delete rejected: no row selected");
        app.notice = Some(Notice::warning("Please select a row to delete."));
        return Effect::None;
    };

    if app.records.remove(index).is_none() {
        warn!("Delete rejected: selected row {index} no longer exists");
        app.selection = Selection::None;
        app.notice = Some(Notice::warning("The selected row no longer exists."));
        return Effect::None;
    }

    app.selection = Selection::None;
    app.status_message = format!("Row deleted ({} left)", app.records.len());
    app.notice = Some(Notice::success("The row has been deleted."));
    Effect::ClearForm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::{self, default_fields, FieldDef, FieldKind};
    use crate::core::state::NoticeLevel;
    use crate::test_support::test_app;

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_submit_appends_row_in_schema_order() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SubmitForm(row(&["SKU1", "10", "desc", "5.00"])));
        assert_eq!(effect, Effect::ClearForm);
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records.rows()[0], row(&["SKU1", "10", "desc", "5.00"]));
        assert_eq!(app.selection, Selection::None);
    }

    #[test]
    fn test_submit_with_empty_value_warns_and_leaves_records_unchanged() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SubmitForm(row(&["SKU1", "", "desc", "5.00"])));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.records.len(), 0);
        let notice = app.notice.expect("expected a validation warning");
        assert_eq!(notice.level, NoticeLevel::Warning);
    }

    #[test]
    fn test_submit_while_selected_replaces_that_row_and_clears_selection() {
        let mut app = test_app();
        update(&mut app, Action::SubmitForm(row(&["a", "1", "x", "2"])));
        update(&mut app, Action::SubmitForm(row(&["b", "2", "y", "3"])));
        update(&mut app, Action::SelectRow(0));
        assert_eq!(app.selection, Selection::Row(0));

        let effect = update(&mut app, Action::SubmitForm(row(&["a", "9", "x", "2"])));
        assert_eq!(effect, Effect::ClearForm);
        assert_eq!(app.records.rows()[0], row(&["a", "9", "x", "2"]));
        assert_eq!(app.records.rows()[1], row(&["b", "2", "y", "3"]));
        assert_eq!(app.selection, Selection::None);
    }

    #[test]
    fn test_update_with_empty_value_keeps_selection_and_row() {
        let mut app = test_app();
        update(&mut app, Action::SubmitForm(row(&["a", "1", "x", "2"])));
        update(&mut app, Action::SelectRow(0));
        let effect = update(&mut app, Action::SubmitForm(row(&["a", "", "x", "2"])));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.records.rows()[0], row(&["a", "1", "x", "2"]));
        assert_eq!(app.selection, Selection::Row(0));
    }

    #[test]
    fn test_delete_selected_removes_exactly_that_row() {
        let mut app = test_app();
        update(&mut app, Action::SubmitForm(row(&["a", "1", "x", "2"])));
        update(&mut app, Action::SubmitForm(row(&["b", "2", "y", "3"])));
        update(&mut app, Action::SelectRow(1));

        let effect = update(&mut app, Action::DeleteSelected);
        assert_eq!(effect, Effect::ClearForm);
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records.rows()[0], row(&["a", "1", "x", "2"]));
        assert_eq!(app.selection, Selection::None);
    }

    #[test]
    fn test_delete_without_selection_warns_and_changes_nothing() {
        let mut app = test_app();
        update(&mut app, Action::SubmitForm(row(&["a", "1", "x", "2"])));
        let effect = update(&mut app, Action::DeleteSelected);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.records.len(), 1);
        assert_eq!(
            app.notice.map(|n| n.level),
            Some(NoticeLevel::Warning)
        );
    }

    #[test]
    fn test_apply_schema_persists_and_realigns_rows() {
        let mut app = test_app();
        update(&mut app, Action::SubmitForm(row(&["a", "1", "x", "2"])));

        let fields = vec![
            FieldDef::new("name", "Name", FieldKind::Text),
            FieldDef::new("count", "Count", FieldKind::Number),
        ];
        let effect = update(&mut app, Action::ApplySchema(fields));
        assert_eq!(effect, Effect::SaveSchema);
        assert_eq!(app.fields.len(), 2);
        // Existing rows are cut down to the new column count.
        assert_eq!(app.records.rows()[0], row(&["a", "1"]));
        assert_eq!(app.selection, Selection::None);
    }

    #[test]
    fn test_import_replaces_schema_and_records_and_saves() {
        let mut app = test_app();
        update(&mut app, Action::SubmitForm(row(&["a", "1", "x", "2"])));

        let fields = schema::fields_from_labels(vec![
            ("Name".to_string(), FieldKind::Text),
            ("Count".to_string(), FieldKind::Text),
        ]);
        let effect = update(
            &mut app,
            Action::ImportLoaded {
                fields,
                rows: vec![row(&["n1", "4"]), row(&["n2", "5"])],
            },
        );
        assert_eq!(effect, Effect::SaveSchema);
        assert_eq!(app.fields.len(), 2);
        assert_eq!(app.records.len(), 2);
        assert_eq!(app.records.rows()[0], row(&["n1", "4"]));
    }

    #[test]
    fn test_default_schema_row_lifecycle() {
        // Scenario from the requirements: add, edit, delete one row against
        // the default four-field schema.
        let mut app = test_app();
        assert_eq!(app.fields, default_fields());

        update(&mut app, Action::SubmitForm(row(&["SKU1", "10", "desc", "5.00"])));
        assert_eq!(app.records.len(), 1);

        update(&mut app, Action::SelectRow(0));
        update(&mut app, Action::SubmitForm(row(&["SKU1", "20", "desc", "5.00"])));
        assert_eq!(app.records.rows()[0], row(&["SKU1", "20", "desc", "5.00"]));

        update(&mut app, Action::SelectRow(0));
        update(&mut app, Action::DeleteSelected);
        assert_eq!(app.records.len(), 0);
        assert_eq!(app.selection, Selection::None);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}

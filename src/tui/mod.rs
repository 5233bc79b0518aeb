//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! Events are routed with overlay precedence: a pending notice swallows
//! everything until dismissed, then the schema editor, then the path
//! prompt, then the global shortcuts, then whichever panel has focus.
//!
//! ## Redraw Strategy
//!
//! The loop only redraws after an event arrived; idle polling sleeps up to
//! 250ms per tick. Every user action is handled to completion (including
//! synchronous schema/workbook I/O) before the next event is read.

mod component;
mod components;
mod event;
mod ui;

use log::{info, warn};

use crate::core::action::{update, Action, Effect};
use crate::core::config::ResolvedConfig;
use crate::core::schema::{self, FieldDef};
use crate::core::state::{App, Notice};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    FormEvent, FormState, PathEvent, PathPromptState, PromptPurpose, RecordTableState,
    SchemaEditorEvent, SchemaEditorState,
};
use crate::tui::event::{poll_event_immediate, poll_event_timeout, TuiEvent};
use crate::xlsx;

/// Which panel receives ordinary keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Typing edits the entry form. Esc switches to Table.
    Form,
    /// Arrow keys move over rows. Esc switches back to Form.
    Table,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub form: FormState,
    pub table: RecordTableState,
    // Panel focus
    pub focus: Focus,
    // Modal overlays (None = hidden)
    pub schema_editor: Option<SchemaEditorState>,
    pub path_prompt: Option<PathPromptState>,
}

impl TuiState {
    pub fn new(field_count: usize) -> Self {
        Self {
            form: FormState::new(field_count),
            table: RecordTableState::new(),
            focus: Focus::Form, // User expects to type immediately
            schema_editor: None,
            path_prompt: None,
        }
    }
}

/// Run one action through the reducer and carry out the returned effect.
/// Returns true when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    let effect = update(app, action);
    match effect {
        Effect::Quit => true,
        Effect::SaveSchema => {
            if let Err(e) = schema::save_schema(&app.schema_path, &app.fields) {
                warn!("Failed to save schema: {}", e);
                app.notice = Some(Notice::warning(format!("Failed to save the schema: {e}")));
            }
            // The schema (and possibly the whole table) changed shape.
            tui.form.rebuild(app.fields.len());
            tui.table.reset();
            false
        }
        Effect::ClearForm => {
            tui.form.clear();
            tui.table.clamp(app.records.len());
            false
        }
        Effect::None => false,
    }
}

/// Run a workbook export or import against the path the user accepted.
fn run_workbook_io(app: &mut App, tui: &mut TuiState, purpose: PromptPurpose, path: &std::path::Path) {
    match purpose {
        PromptPurpose::Export => {
            match xlsx::export_workbook(
                path,
                &app.fields,
                app.records.rows(),
                &app.sheet_name,
                app.column_width,
            ) {
                Ok(()) => {
                    app.status_message = format!("Exported {} rows", app.records.len());
                    app.notice = Some(Notice::success(
                        "The data has been exported to a styled workbook.",
                    ));
                }
                Err(e) => {
                    warn!("Export to {} failed: {}", path.display(), e);
                    app.notice = Some(Notice::warning(format!("Export failed: {e}")));
                }
            }
        }
        PromptPurpose::Import => match xlsx::import_workbook(path) {
            Ok(table) => {
                dispatch(
                    app,
                    tui,
                    Action::ImportLoaded {
                        fields: table.fields,
                        rows: table.rows,
                    },
                );
            }
            Err(e) => {
                warn!("Import from {} failed: {}", path.display(), e);
                app.notice = Some(Notice::warning(format!("Import failed: {e}")));
            }
        },
    }
}

pub fn run(config: ResolvedConfig, fields: Vec<FieldDef>) -> std::io::Result<()> {
    let mut app = App::new(fields, &config);
    let mut tui = TuiState::new(app.fields.len());

    let mut terminal = ratatui::init();
    info!("TUI started with {} fields", app.fields.len());

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C / Ctrl+Q always quit
            if matches!(event, TuiEvent::ForceQuit) {
                if dispatch(&mut app, &mut tui, Action::Quit) {
                    should_quit = true;
                }
                continue;
            }

            // A pending notice blocks everything until dismissed
            if app.notice.is_some() {
                if matches!(event, TuiEvent::Submit | TuiEvent::Escape) {
                    app.notice = None;
                }
                continue;
            }

            // Schema editor overlay
            if let Some(ref mut editor) = tui.schema_editor {
                if let Some(editor_event) = editor.handle_event(&event) {
                    match editor_event {
                        SchemaEditorEvent::Save(fields) => {
                            tui.schema_editor = None;
                            if dispatch(&mut app, &mut tui, Action::ApplySchema(fields)) {
                                should_quit = true;
                            }
                        }
                        SchemaEditorEvent::Warn(text) => {
                            app.notice = Some(Notice::warning(text));
                        }
                        SchemaEditorEvent::Dismiss => {
                            tui.schema_editor = None;
                        }
                    }
                }
                continue;
            }

            // Path prompt overlay
            if let Some(ref mut prompt) = tui.path_prompt {
                if let Some(path_event) = prompt.handle_event(&event) {
                    match path_event {
                        PathEvent::Accept(path) => {
                            let purpose = prompt.purpose;
                            tui.path_prompt = None;
                            run_workbook_io(&mut app, &mut tui, purpose, &path);
                        }
                        PathEvent::Cancel => {
                            tui.path_prompt = None;
                        }
                    }
                }
                continue;
            }

            // Global shortcuts
            match event {
                TuiEvent::OpenSchemaEditor => {
                    tui.schema_editor = Some(SchemaEditorState::new(&app.fields));
                    continue;
                }
                TuiEvent::Export => {
                    tui.path_prompt = Some(PathPromptState::new(PromptPurpose::Export));
                    continue;
                }
                TuiEvent::Import => {
                    tui.path_prompt = Some(PathPromptState::new(PromptPurpose::Import));
                    continue;
                }
                TuiEvent::DeleteRow => {
                    if dispatch(&mut app, &mut tui, Action::DeleteSelected) {
                        should_quit = true;
                    }
                    continue;
                }
                TuiEvent::ClearForm => {
                    tui.form.clear();
                    if dispatch(&mut app, &mut tui, Action::ClearSelection) {
                        should_quit = true;
                    }
                    continue;
                }
                _ => {}
            }

            // Panel dispatch
            match tui.focus {
                Focus::Form => {
                    if matches!(event, TuiEvent::Escape) {
                        tui.focus = Focus::Table;
                        if tui.table.hover.is_none() && !app.records.is_empty() {
                            tui.table.move_down(app.records.len());
                        }
                        continue;
                    }
                    if let Some(FormEvent::Submit(values)) = tui.form.handle_event(&event) {
                        if dispatch(&mut app, &mut tui, Action::SubmitForm(values)) {
                            should_quit = true;
                        }
                    }
                }
                Focus::Table => match event {
                    TuiEvent::Escape => {
                        tui.focus = Focus::Form;
                    }
                    TuiEvent::CursorUp => {
                        tui.table.move_up(app.records.len());
                    }
                    TuiEvent::CursorDown => {
                        tui.table.move_down(app.records.len());
                    }
                    TuiEvent::Submit => {
                        if let Some(index) = tui.table.hover {
                            if dispatch(&mut app, &mut tui, Action::SelectRow(index)) {
                                should_quit = true;
                            }
                            if let Some(row) = app.records.get(index) {
                                let row = row.clone();
                                tui.form.set_values(&row);
                            }
                            tui.focus = Focus::Form;
                        }
                    }
                    _ => {}
                },
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    info!("TUI stopped");
    Ok(())
}

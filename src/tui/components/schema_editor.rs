//! # Schema Editor Component
//!
//! Modal overlay for customizing the form: edit field labels, toggle field
//! kinds, add and remove fields. Opened with Ctrl+E, dismissed with Esc.
//!
//! The editor works on a scratch copy of the schema. Nothing touches the
//! live schema until Enter passes validation (at least two labeled
//! fields); Esc discards the scratch with no effect.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SchemaEditorState` lives in `TuiState`
//! - `SchemaEditor` is created each frame with borrowed state

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::core::schema::{fields_from_labels, FieldDef, FieldKind, MIN_FIELDS};
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::ui::centered_rect;

/// One scratch row of the editor: a label being typed plus a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRow {
    pub label: String,
    pub kind: FieldKind,
}

/// Events emitted by the schema editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaEditorEvent {
    /// Validation passed; replace the live schema with these fields.
    Save(Vec<FieldDef>),
    /// Validation failed; show a warning, keep the editor open.
    Warn(String),
    Dismiss,
}

/// Persistent scratch state for the schema editor overlay.
pub struct SchemaEditorState {
    pub rows: Vec<EditorRow>,
    pub selected: usize,
    /// Cursor byte offset within the selected row's label.
    cursor: usize,
    pub list_state: ListState,
}

impl SchemaEditorState {
    /// Seed the scratch buffer from the live schema.
    pub fn new(fields: &[FieldDef]) -> Self {
        let rows: Vec<EditorRow> = fields
            .iter()
            .map(|f| EditorRow {
                label: f.label.clone(),
                kind: f.kind,
            })
            .collect();
        let mut list_state = ListState::default();
        if !rows.is_empty() {
            list_state.select(Some(0));
        }
        let cursor = rows.first().map_or(0, |r| r.label.len());
        Self {
            rows,
            selected: 0,
            cursor,
            list_state,
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.cursor = self.rows.get(index).map_or(0, |r| r.label.len());
        self.list_state.select(Some(index));
    }

    fn selected_label(&self) -> &str {
        self.rows.get(self.selected).map_or("", |r| r.label.as_str())
    }

    /// Build the saved schema from rows that carry a label.
    fn labeled_rows(&self) -> Vec<(String, FieldKind)> {
        self.rows
            .iter()
            .filter(|r| !r.label.is_empty())
            .map(|r| (r.label.clone(), r.kind))
            .collect()
    }
}

impl EventHandler for SchemaEditorState {
    type Event = SchemaEditorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SchemaEditorEvent> {
        match event {
            TuiEvent::Escape => Some(SchemaEditorEvent::Dismiss),
            TuiEvent::CursorUp => {
                if self.selected > 0 {
                    self.select(self.selected - 1);
                }
                None
            }
            TuiEvent::CursorDown => {
                if self.selected + 1 < self.rows.len() {
                    self.select(self.selected + 1);
                }
                None
            }
            TuiEvent::InputChar(c) => {
                let cursor = self.cursor;
                if let Some(row) = self.rows.get_mut(self.selected) {
                    row.label.insert(cursor, *c);
                    self.cursor += c.len_utf8();
                }
                None
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let mut prev = self.cursor - 1;
                while prev > 0 && !self.selected_label().is_char_boundary(prev) {
                    prev -= 1;
                }
                if let Some(row) = self.rows.get_mut(self.selected) {
                    row.label.remove(prev);
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::Tab => {
                if let Some(row) = self.rows.get_mut(self.selected) {
                    row.kind = row.kind.toggled();
                }
                None
            }
            TuiEvent::AddEditorRow => {
                self.rows.push(EditorRow {
                    label: String::new(),
                    kind: FieldKind::Text,
                });
                self.select(self.rows.len() - 1);
                None
            }
            TuiEvent::DeleteRow => {
                if self.rows.len() <= MIN_FIELDS {
                    return Some(SchemaEditorEvent::Warn(format!(
                        "The form must keep at least {MIN_FIELDS} fields."
                    )));
                }
                self.rows.remove(self.selected);
                self.select(self.selected.min(self.rows.len() - 1));
                None
            }
            TuiEvent::Submit => {
                let labeled = self.labeled_rows();
                if labeled.len() < MIN_FIELDS {
                    return Some(SchemaEditorEvent::Warn(format!(
                        "The form must keep at least {MIN_FIELDS} labeled fields."
                    )));
                }
                Some(SchemaEditorEvent::Save(fields_from_labels(labeled)))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the schema editor overlay.
pub struct SchemaEditor<'a> {
    state: &'a mut SchemaEditorState,
}

impl<'a> SchemaEditor<'a> {
    pub fn new(state: &'a mut SchemaEditorState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 70, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = " Type label  Tab type  ^N add  ^D remove  Enter save  Esc cancel ";
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Customize form ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);

        if self.state.rows.is_empty() {
            let empty = Paragraph::new("No fields. Press Ctrl+N to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let kind = format!("[{}]", row.kind.label());
                let label = if row.label.is_empty() && i != self.state.selected {
                    Span::styled("(unnamed)", style.fg(Color::DarkGray))
                } else {
                    Span::styled(row.label.clone(), style)
                };
                ListItem::new(Line::from(vec![
                    label,
                    Span::raw("  "),
                    Span::styled(kind, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);

        // Cursor inside the selected label, accounting for list scroll.
        let offset = self.state.list_state.offset();
        if self.state.selected >= offset {
            let visible_row = (self.state.selected - offset) as u16;
            if visible_row < inner.height {
                let label = self.state.selected_label();
                let x = inner.x + label[..self.state.cursor.min(label.len())].width() as u16;
                frame.set_cursor_position((x, inner.y + visible_row));
            }
        }
    }
}

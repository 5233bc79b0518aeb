//! # Form Component
//!
//! The entry form on the left of the screen. It is rendered generically
//! from the active schema: one single-line entry per field, in column
//! order. Selecting a table row pre-populates the entries; submitting
//! emits the raw values for the reducer to validate.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FormState` lives in `TuiState` (buffers, focus, cursor)
//! - `Form` is created each frame with borrowed state and schema props

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::schema::FieldDef;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

const MAX_LABEL_COL: usize = 24;

/// Events emitted by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// User submitted the entries (Enter pressed). Values are in schema
    /// order, untrimmed.
    Submit(Vec<String>),
}

/// Persistent entry buffers and focus for the form.
pub struct FormState {
    /// One buffer per schema field, positionally aligned.
    pub entries: Vec<String>,
    /// Index of the focused entry.
    pub focused: usize,
    /// Cursor byte offset within the focused entry.
    cursor: usize,
    /// First visible field when the form is taller than its area.
    scroll: usize,
}

impl FormState {
    pub fn new(field_count: usize) -> Self {
        Self {
            entries: vec![String::new(); field_count],
            focused: 0,
            cursor: 0,
            scroll: 0,
        }
    }

    /// Reset the buffers for a new schema (after customize or import).
    pub fn rebuild(&mut self, field_count: usize) {
        *self = Self::new(field_count);
    }

    /// Empty every entry and return focus to the first field.
    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            entry.clear();
        }
        self.focused = 0;
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Pre-populate the entries from a row (used when a row is selected
    /// for editing). Missing values clear the remaining entries.
    pub fn set_values(&mut self, values: &[String]) {
        for (i, entry) in self.entries.iter_mut().enumerate() {
            *entry = values.get(i).cloned().unwrap_or_default();
        }
        self.focused = 0;
        self.cursor = self.entries.first().map_or(0, |e| e.len());
    }

    pub fn values(&self) -> Vec<String> {
        self.entries.clone()
    }

    fn focused_entry(&self) -> &str {
        self.entries.get(self.focused).map_or("", |e| e.as_str())
    }

    fn focus(&mut self, index: usize) {
        self.focused = index;
        self.cursor = self.focused_entry().len();
    }

    fn focus_next(&mut self) {
        if !self.entries.is_empty() {
            self.focus((self.focused + 1) % self.entries.len());
        }
    }

    fn focus_prev(&mut self) {
        if !self.entries.is_empty() {
            let last = self.entries.len() - 1;
            self.focus(if self.focused == 0 { last } else { self.focused - 1 });
        }
    }

    fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        if let Some(entry) = self.entries.get_mut(self.focused) {
            entry.insert(cursor, c);
            self.cursor += c.len_utf8();
        }
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = prev_char_boundary(self.focused_entry(), self.cursor);
        if let Some(entry) = self.entries.get_mut(self.focused) {
            entry.remove(prev);
            self.cursor = prev;
        }
    }

    fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = prev_char_boundary(self.focused_entry(), self.cursor);
        }
    }

    fn move_right(&mut self) {
        let entry = self.focused_entry();
        if self.cursor < entry.len() {
            self.cursor = next_char_boundary(entry, self.cursor);
        }
    }
}

impl EventHandler for FormState {
    type Event = FormEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FormEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.insert_char(*c);
                None
            }
            TuiEvent::Backspace => {
                self.backspace();
                None
            }
            TuiEvent::CursorLeft => {
                self.move_left();
                None
            }
            TuiEvent::CursorRight => {
                self.move_right();
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.focused_entry().len();
                None
            }
            TuiEvent::Tab | TuiEvent::CursorDown => {
                self.focus_next();
                None
            }
            TuiEvent::BackTab | TuiEvent::CursorUp => {
                self.focus_prev();
                None
            }
            TuiEvent::Submit => Some(FormEvent::Submit(self.values())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the form panel.
pub struct Form<'a> {
    state: &'a mut FormState,
    fields: &'a [FieldDef],
    /// Row index being edited, if a row is selected.
    editing: Option<usize>,
    /// Whether the form currently has keyboard focus.
    focused: bool,
}

impl<'a> Form<'a> {
    pub fn new(
        state: &'a mut FormState,
        fields: &'a [FieldDef],
        editing: Option<usize>,
        focused: bool,
    ) -> Self {
        Self {
            state,
            fields,
            editing,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.editing {
            Some(i) => format!(" Edit row {} ", i + 1),
            None => String::from(" Add a row "),
        };
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.fields.is_empty() || inner.height == 0 {
            return;
        }

        let label_col = self
            .fields
            .iter()
            .map(|f| f.label.as_str().width())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_COL);

        // Keep the focused field inside the visible window.
        let visible = inner.height as usize;
        if self.state.focused < self.state.scroll {
            self.state.scroll = self.state.focused;
        } else if self.state.focused >= self.state.scroll + visible {
            self.state.scroll = self.state.focused + 1 - visible;
        }

        let lines: Vec<Line> = self
            .fields
            .iter()
            .enumerate()
            .skip(self.state.scroll)
            .take(visible)
            .map(|(i, field)| {
                let is_focused = i == self.state.focused;
                let label_style = if is_focused && self.focused {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let value = self.state.entries.get(i).map_or("", |e| e.as_str());
                Line::from(vec![
                    Span::styled(pad_to_width(&field.label, label_col), label_style),
                    Span::raw(" "),
                    Span::raw(value.to_string()),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);

        // Place the terminal cursor inside the focused entry.
        if self.focused {
            let entry = self.state.focused_entry();
            let cursor_x = inner.x
                + label_col as u16
                + 1
                + entry[..self.state.cursor.min(entry.len())].width() as u16;
            let cursor_y = inner.y + (self.state.focused - self.state.scroll) as u16;
            if cursor_y < inner.y + inner.height {
                frame.set_cursor_position((cursor_x, cursor_y));
            }
        }
    }
}

/// Pad (or truncate) a label to a fixed display width.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn prev_char_boundary(s: &str, from: usize) -> usize {
    let mut i = from.saturating_sub(1);
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_char_boundary(s: &str, from: usize) -> usize {
    let mut i = from + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i.min(s.len())
}

//! # RecordTable Component
//!
//! The table on the right of the screen: one column per schema field, one
//! row per record. The hover row (table navigation) is distinct from the
//! core `Selection` (the row the form is editing), which stays highlighted
//! while the user types in the form.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `RecordTableState` lives in `TuiState` (hover + scroll offset)
//! - `RecordTable` is created each frame with borrowed state and props

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Cell, Row as TableRow, Table, TableState};
use ratatui::Frame;

use crate::core::records::Records;
use crate::core::schema::FieldDef;
use crate::core::state::Selection;

/// Persistent hover and scroll state for the record table.
pub struct RecordTableState {
    /// Row the table cursor is on (None when the table is empty).
    pub hover: Option<usize>,
    pub table_state: TableState,
}

impl Default for RecordTableState {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordTableState {
    pub fn new() -> Self {
        Self {
            hover: None,
            table_state: TableState::default(),
        }
    }

    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            self.hover = None;
            return;
        }
        self.hover = Some(match self.hover {
            Some(i) => i.saturating_sub(1),
            None => len - 1,
        });
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            self.hover = None;
            return;
        }
        self.hover = Some(match self.hover {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
    }

    /// Keep the hover valid after rows were removed or replaced.
    pub fn clamp(&mut self, len: usize) {
        self.hover = match (self.hover, len) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => None,
        };
    }

    pub fn reset(&mut self) {
        self.hover = None;
        self.table_state = TableState::default();
    }
}

/// Transient render wrapper for the record table.
pub struct RecordTable<'a> {
    state: &'a mut RecordTableState,
    fields: &'a [FieldDef],
    records: &'a Records,
    selection: Selection,
    /// Whether the table currently has keyboard focus.
    focused: bool,
}

impl<'a> RecordTable<'a> {
    pub fn new(
        state: &'a mut RecordTableState,
        fields: &'a [FieldDef],
        records: &'a Records,
        selection: Selection,
        focused: bool,
    ) -> Self {
        Self {
            state,
            fields,
            records,
            selection,
            focused,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" Table ({} rows) ", self.records.len()));

        let header = TableRow::new(
            self.fields
                .iter()
                .map(|f| Cell::from(f.label.clone()))
                .collect::<Vec<_>>(),
        )
        .style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

        let selected = self.selection.row();
        let rows: Vec<TableRow> = self
            .records
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let style = if selected == Some(i) {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                TableRow::new(row.iter().map(|v| Cell::from(v.clone())).collect::<Vec<_>>())
                    .style(style)
            })
            .collect();

        let widths = vec![Constraint::Fill(1); self.fields.len().max(1)];
        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        self.state.table_state.select(self.state.hover);
        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::default_fields;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_hover_moves_and_clamps() {
        let mut state = RecordTableState::new();
        state.move_down(3);
        assert_eq!(state.hover, Some(0));
        state.move_down(3);
        state.move_down(3);
        state.move_down(3); // bottom, stays put
        assert_eq!(state.hover, Some(2));
        state.clamp(1);
        assert_eq!(state.hover, Some(0));
        state.clamp(0);
        assert_eq!(state.hover, None);
    }

    #[test]
    fn test_move_up_from_nothing_lands_on_last_row() {
        let mut state = RecordTableState::new();
        state.move_up(4);
        assert_eq!(state.hover, Some(3));
    }

    #[test]
    fn test_render_smoke() {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let fields = default_fields();
        let mut records = Records::new();
        records.add(vec![
            "SKU1".to_string(),
            "10".to_string(),
            "desc".to_string(),
            "5.00".to_string(),
        ]);
        let mut state = RecordTableState::new();
        state.move_down(records.len());
        terminal
            .draw(|f| {
                let area = f.area();
                RecordTable::new(&mut state, &fields, &records, Selection::Row(0), true)
                    .render(f, area);
            })
            .unwrap();
    }
}

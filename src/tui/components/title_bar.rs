//! # TitleBar Component
//!
//! Top status bar showing the schema file, table dimensions, and the
//! current status message.
//!
//! Stateless: it receives all data as props and renders a single line.

use crate::tui::component::Component;
use ratatui::layout::Rect;
use ratatui::text::Span;
use ratatui::Frame;

pub struct TitleBar {
    /// Display name of the schema file (e.g. "form_schema.json")
    pub schema_file: String,
    pub field_count: usize,
    pub record_count: usize,
    /// Transient status (e.g. "Row added (3 total)")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(
        schema_file: String,
        field_count: usize,
        record_count: usize,
        status_message: String,
    ) -> Self {
        Self {
            schema_file,
            field_count,
            record_count,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = if self.status_message.is_empty() {
            format!(
                "gridform ({}) | {} fields, {} rows",
                self.schema_file, self.field_count, self.record_count
            )
        } else {
            format!(
                "gridform ({}) | {} fields, {} rows | {}",
                self.schema_file, self.field_count, self.record_count, self.status_message
            )
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}

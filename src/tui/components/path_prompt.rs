//! # PathPrompt Component
//!
//! Small modal overlay asking for a workbook path, used by both export
//! (Ctrl+S) and import (Ctrl+O). Accepting appends the `.xlsx` extension
//! when missing, so the prompt only ever hands back spreadsheet paths.

use std::path::PathBuf;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::ui::centered_rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    Export,
    Import,
}

impl PromptPurpose {
    fn title(&self) -> &'static str {
        match self {
            PromptPurpose::Export => " Export to workbook ",
            PromptPurpose::Import => " Import from workbook ",
        }
    }
}

/// Events emitted by the path prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathEvent {
    Accept(PathBuf),
    Cancel,
}

/// Persistent state for the path prompt overlay.
pub struct PathPromptState {
    pub purpose: PromptPurpose,
    pub buffer: String,
    cursor: usize,
}

impl PathPromptState {
    pub fn new(purpose: PromptPurpose) -> Self {
        // Export gets a usable default; import starts blank.
        let buffer = match purpose {
            PromptPurpose::Export => String::from("records.xlsx"),
            PromptPurpose::Import => String::new(),
        };
        let cursor = buffer.len();
        Self {
            purpose,
            buffer,
            cursor,
        }
    }

    fn accept(&self) -> Option<PathEvent> {
        if self.buffer.is_empty() {
            return None;
        }
        let mut path = PathBuf::from(&self.buffer);
        if path.extension().is_none() {
            path.set_extension("xlsx");
        }
        Some(PathEvent::Accept(path))
    }
}

impl EventHandler for PathPromptState {
    type Event = PathEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PathEvent> {
        match event {
            TuiEvent::Escape => Some(PathEvent::Cancel),
            TuiEvent::Submit => self.accept(),
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                None
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let mut prev = self.cursor - 1;
                    while prev > 0 && !self.buffer.is_char_boundary(prev) {
                        prev -= 1;
                    }
                    self.buffer.remove(prev);
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::CursorLeft => {
                if self.cursor > 0 {
                    let mut prev = self.cursor - 1;
                    while prev > 0 && !self.buffer.is_char_boundary(prev) {
                        prev -= 1;
                    }
                    self.cursor = prev;
                }
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.buffer.len() {
                    let mut next = self.cursor + 1;
                    while next < self.buffer.len() && !self.buffer.is_char_boundary(next) {
                        next += 1;
                    }
                    self.cursor = next;
                }
                None
            }
            TuiEvent::Home => {
                self.cursor = 0;
                None
            }
            TuiEvent::End => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the path prompt overlay.
pub struct PathPrompt<'a> {
    state: &'a mut PathPromptState,
}

impl<'a> PathPrompt<'a> {
    pub fn new(state: &'a mut PathPromptState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 20, area);
        let overlay = Rect {
            height: overlay.height.min(3),
            ..overlay
        };

        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(self.state.purpose.title())
            .title_bottom(Line::from(" Enter accept  Esc cancel ").centered())
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);

        let input = Paragraph::new(self.state.buffer.as_str()).block(block);
        frame.render_widget(input, overlay);

        let x = inner.x + self.state.buffer[..self.state.cursor].width() as u16;
        frame.set_cursor_position((x.min(inner.x + inner.width), inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_prompt_prefills_a_default_name() {
        let state = PathPromptState::new(PromptPurpose::Export);
        assert_eq!(state.buffer, "records.xlsx");
    }

    #[test]
    fn test_accept_appends_xlsx_extension() {
        let mut state = PathPromptState::new(PromptPurpose::Import);
        for c in "inventory".chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
        let event = state.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(PathEvent::Accept(PathBuf::from("inventory.xlsx"))));
    }

    #[test]
    fn test_accept_keeps_an_existing_extension() {
        let mut state = PathPromptState::new(PromptPurpose::Import);
        for c in "data.xlsm".chars() {
            state.handle_event(&TuiEvent::InputChar(c));
        }
        let event = state.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(PathEvent::Accept(PathBuf::from("data.xlsm"))));
    }

    #[test]
    fn test_empty_buffer_does_not_accept() {
        let mut state = PathPromptState::new(PromptPurpose::Import);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(PathEvent::Cancel));
    }
}

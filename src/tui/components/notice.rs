//! # Notice Component
//!
//! Blocking message dialog (info/success/warning). Rendered over
//! everything else; the event loop swallows all input until the user
//! dismisses it with Enter or Esc.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::core::state::{Notice, NoticeLevel};
use crate::tui::ui::centered_rect;

/// Transient render wrapper for a pending notice.
pub struct NoticeDialog<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 25, area);
        let overlay = Rect {
            height: overlay.height.min(6),
            ..overlay
        };

        frame.render_widget(Clear, overlay);

        let (title, color) = match self.notice.level {
            NoticeLevel::Info => (" Info ", Color::Blue),
            NoticeLevel::Success => (" Success ", Color::Green),
            NoticeLevel::Warning => (" Warning ", Color::Yellow),
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(title)
            .title_bottom(Line::from(" Enter to dismiss ").centered())
            .padding(Padding::uniform(1));

        let body = Paragraph::new(self.notice.text.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(body, overlay);
    }
}

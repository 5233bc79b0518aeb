use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    Form, NoticeDialog, PathPrompt, RecordTable, SchemaEditor, TitleBar,
};
use crate::tui::{Focus, TuiState};

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::Frame;

/// Width of the entry form panel on the left.
const FORM_WIDTH: u16 = 42;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    // Title bar
    let schema_file = app
        .schema_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| app.schema_path.display().to_string());
    TitleBar::new(
        schema_file,
        app.fields.len(),
        app.records.len(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    // Main area: entry form on the left, record table on the right
    let [form_area, table_area] =
        Layout::horizontal([Length(FORM_WIDTH), Min(0)]).areas(main_area);

    let overlay_open =
        tui.schema_editor.is_some() || tui.path_prompt.is_some() || app.notice.is_some();

    Form::new(
        &mut tui.form,
        &app.fields,
        app.selection.row(),
        tui.focus == Focus::Form && !overlay_open,
    )
    .render(frame, form_area);

    RecordTable::new(
        &mut tui.table,
        &app.fields,
        &app.records,
        app.selection,
        tui.focus == Focus::Table && !overlay_open,
    )
    .render(frame, table_area);

    // Help bar
    let help = match tui.focus {
        Focus::Form => {
            " Enter submit  ↑↓ field  Esc table  ^E schema  ^S export  ^O import  ^D delete  ^L clear  ^Q quit "
        }
        Focus::Table => {
            " ↑↓ move  Enter edit row  Esc form  ^E schema  ^S export  ^O import  ^D delete  ^Q quit "
        }
    };
    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );

    // Overlays, topmost last
    let full_area = frame.area();
    if let Some(ref mut editor) = tui.schema_editor {
        SchemaEditor::new(editor).render(frame, full_area);
    }
    if let Some(ref mut prompt) = tui.path_prompt {
        PathPrompt::new(prompt).render(frame, full_area);
    }
    if let Some(ref notice) = app.notice {
        NoticeDialog::new(notice).render(frame, full_area);
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use crate::tui::TuiState;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_draw_ui_smoke() {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new(app.fields.len());
        terminal
            .draw(|f| {
                draw_ui(f, &app, &mut tui);
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("gridform"));
        assert!(text.contains("Add a row"));
        assert!(text.contains("Table (0 rows)"));
    }

    #[test]
    fn test_centered_rect_stays_inside_outer() {
        let outer = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(60, 50, outer);
        assert!(rect.width <= 60);
        assert!(rect.x >= 20);
        assert!(rect.y >= 10);
    }
}

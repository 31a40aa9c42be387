pub mod focus_view;
pub mod header;
pub mod links_bar;
pub mod schedule_view;
pub mod status_row;
pub mod tasks_view;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Block;

use super::app::App;
use super::editor::FieldEditor;
use super::theme::Theme;

/// Main render function — dispatches to the card's sections
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: links bar | date header | card columns | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    links_bar::render_links_bar(frame, app, chunks[0]);
    header::render_header(frame, app, chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[2]);

    tasks_view::render_tasks_view(frame, app, columns[0]);
    schedule_view::render_schedule_view(frame, app, columns[1]);
    focus_view::render_focus_view(frame, app, columns[2]);

    status_row::render_status_row(frame, app, chunks[3]);
}

/// Uppercase section heading, brightened when the section is active.
pub(super) fn section_title(theme: &Theme, text: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(theme.highlight)
            .bg(theme.background)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim).bg(theme.background)
    };
    Span::styled(text.to_uppercase(), style)
}

/// Spans for an open editor: the buffer with the cursor cell reversed.
/// A cursor at the end of the buffer shows as a reversed space.
pub(super) fn edit_spans(theme: &Theme, editor: &FieldEditor) -> Vec<Span<'static>> {
    use unicode_segmentation::UnicodeSegmentation;

    let base = Style::default().fg(theme.text_bright).bg(theme.background);
    let cursor_style = base.add_modifier(Modifier::REVERSED);

    let graphemes: Vec<&str> = editor.buffer().graphemes(true).collect();
    let cell = editor.cursor_cell();

    let before: String = graphemes[..cell.min(graphemes.len())].concat();
    let at: String = graphemes.get(cell).copied().unwrap_or(" ").to_string();
    let after: String = if cell + 1 <= graphemes.len() {
        graphemes[(cell + 1).min(graphemes.len())..].concat()
    } else {
        String::new()
    };

    let mut spans = Vec::new();
    if !before.is_empty() {
        spans.push(Span::styled(before, base));
    }
    spans.push(Span::styled(at, cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, base));
    }
    spans
}

/// Value-or-placeholder span for an idle editable field.
pub(super) fn value_span(theme: &Theme, value: &str, placeholder: &str, active: bool) -> Span<'static> {
    if value.is_empty() {
        Span::styled(
            placeholder.to_string(),
            Style::default().fg(theme.dim).bg(theme.background),
        )
    } else {
        let fg = if active { theme.text_bright } else { theme.text };
        Span::styled(value.to_string(), Style::default().fg(fg).bg(theme.background))
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode, Section};

use super::{edit_spans, section_title};

/// The schedule column ("Календарь дня")
pub fn render_schedule_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.section == Section::Schedule;
    let bg = theme.background;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        section_title(theme, "Календарь дня", active),
    ]));
    lines.push(Line::from(""));

    for (i, entry) in app.board.schedule.iter().enumerate() {
        let is_cursor = active && app.mode != Mode::Add && i == app.schedule_cursor;
        let editing_time = app.mode == Mode::Edit
            && app.edit_target == Some(EditTarget::EventTime(entry.id));
        let editing_title = app.mode == Mode::Edit
            && app.edit_target == Some(EditTarget::EventTitle(entry.id));

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            if is_cursor { "›" } else { " " },
            Style::default().fg(theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(
            "● ",
            Style::default().fg(theme.kind_color(entry.kind)).bg(bg),
        ));

        if editing_time {
            if let Some(editor) = &app.editor {
                spans.extend(edit_spans(theme, editor));
            }
        } else {
            spans.push(Span::styled(
                format!("{:<6}", entry.time),
                Style::default().fg(theme.dim).bg(bg),
            ));
        }

        if editing_title {
            if let Some(editor) = &app.editor {
                spans.extend(edit_spans(theme, editor));
            }
        } else {
            let fg = if is_cursor { theme.text_bright } else { theme.text };
            spans.push(Span::styled(
                entry.title.clone(),
                Style::default().fg(fg).bg(bg),
            ));
        }

        lines.push(Line::from(spans));
    }

    if let Some(draft) = app.event_form.draft() {
        lines.push(Line::from(""));
        let field_style = |focused: bool| {
            if focused {
                Style::default()
                    .fg(theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.text).bg(bg)
            }
        };
        let placeholder = |s: &str, text: &str| -> String {
            if text.is_empty() { s.to_string() } else { text.to_string() }
        };
        lines.push(Line::from(vec![
            Span::styled(" + ", Style::default().fg(theme.highlight).bg(bg)),
            Span::styled(
                placeholder("00:00", &draft.time),
                field_style(app.add_field == 0),
            ),
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                placeholder("Название события", &draft.title),
                field_style(app.add_field == 1),
            ),
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(draft.kind.label().to_string(), field_style(app.add_field == 2)),
        ]));
    } else {
        lines.push(Line::styled(
            " + добавить событие (a)",
            Style::default().fg(theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{render_to_string, test_app};

    #[test]
    fn shows_entries_with_times() {
        let app = test_app();
        let out = render_to_string(60, 14, |frame, area| {
            render_schedule_view(frame, &app, area);
        });
        assert!(out.contains("КАЛЕНДАРЬ ДНЯ"));
        assert!(out.contains("09:00"));
        assert!(out.contains("Планирование дня"));
        assert!(out.contains("Статус-митинг"));
    }

    #[test]
    fn open_form_shows_kind_label() {
        let mut app = test_app();
        app.section = Section::Schedule;
        app.event_form.start_adding();
        app.mode = Mode::Add;
        let out = render_to_string(60, 14, |frame, area| {
            render_schedule_view(frame, &app, area);
        });
        // Default draft kind is focus
        assert!(out.contains("фокус"));
        assert!(out.contains("Название события"));
    }
}

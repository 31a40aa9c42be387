use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, FocusField, Mode, Section};

use super::{edit_spans, section_title, value_span};

fn field_title(field: FocusField) -> &'static str {
    match field {
        FocusField::Week => "Фокус недели",
        FocusField::Month => "Фокус месяца",
        FocusField::Quarter => "Фокус квартала",
        FocusField::Quote => "Мысль дня",
    }
}

fn field_placeholder(field: FocusField) -> &'static str {
    match field {
        FocusField::Week => "Введите фокус недели...",
        FocusField::Month => "Введите фокус месяца...",
        FocusField::Quarter => "Введите фокус квартала...",
        FocusField::Quote => "Введите цитату...",
    }
}

/// The right-hand column: three focus notes and the quote
pub fn render_focus_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.section == Section::Focus;
    let bg = theme.background;

    let mut lines: Vec<Line> = Vec::new();

    for (i, field) in FocusField::ALL.into_iter().enumerate() {
        let is_cursor = active && i == app.focus_cursor;
        let editing = app.mode == Mode::Edit && app.edit_target == Some(EditTarget::Focus(field));

        lines.push(Line::from(vec![
            Span::styled(
                if is_cursor { "›" } else { " " },
                Style::default().fg(theme.highlight).bg(bg),
            ),
            section_title(theme, field_title(field), is_cursor),
        ]));

        if editing {
            if let Some(editor) = &app.editor {
                let mut spans = vec![Span::styled("  ", Style::default().bg(bg))];
                spans.extend(edit_spans(theme, editor));
                lines.push(Line::from(spans));
            }
        } else {
            lines.push(Line::from(vec![
                Span::styled("  ", Style::default().bg(bg)),
                value_span(
                    theme,
                    field.value(&app.board),
                    field_placeholder(field),
                    is_cursor,
                ),
            ]));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{render_to_string, test_app};

    #[test]
    fn shows_all_four_fields() {
        let app = test_app();
        let out = render_to_string(70, 16, |frame, area| {
            render_focus_view(frame, &app, area);
        });
        assert!(out.contains("ФОКУС НЕДЕЛИ"));
        assert!(out.contains("ФОКУС МЕСЯЦА"));
        assert!(out.contains("ФОКУС КВАРТАЛА"));
        assert!(out.contains("МЫСЛЬ ДНЯ"));
        assert!(out.contains("Запуск нового продукта"));
    }

    #[test]
    fn empty_field_shows_placeholder() {
        let mut app = test_app();
        app.board.quote.clear();
        let out = render_to_string(70, 16, |frame, area| {
            render_focus_view(frame, &app, area);
        });
        assert!(out.contains("Введите цитату..."));
    }
}

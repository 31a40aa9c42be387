use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode, Section};

use super::{edit_spans, section_title};

/// The task list column ("Ключевые задачи")
pub fn render_tasks_view(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.section == Section::Tasks;
    let bg = theme.background;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        section_title(theme, "Ключевые задачи", active),
    ]));
    lines.push(Line::from(""));

    for (i, task) in app.board.tasks.iter().enumerate() {
        let is_cursor = active && app.mode != Mode::Add && i == app.tasks_cursor;
        let editing = app.mode == Mode::Edit
            && app.edit_target == Some(EditTarget::TaskText(task.id));

        let mut spans: Vec<Span> = Vec::new();
        spans.push(Span::styled(
            if is_cursor { "›" } else { " " },
            Style::default().fg(theme.highlight).bg(bg),
        ));

        let checkbox = if task.completed { "[x] " } else { "[ ] " };
        let checkbox_style = if task.completed {
            Style::default().fg(theme.green).bg(bg)
        } else {
            Style::default().fg(theme.dim).bg(bg)
        };
        spans.push(Span::styled(checkbox, checkbox_style));

        if editing {
            if let Some(editor) = &app.editor {
                spans.extend(edit_spans(theme, editor));
            }
        } else {
            let mut style = Style::default().bg(bg).fg(if is_cursor {
                theme.text_bright
            } else {
                theme.text
            });
            if task.completed {
                style = style.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT);
            }
            spans.push(Span::styled(task.text.clone(), style));
        }

        lines.push(Line::from(spans));
    }

    if let Some(draft) = app.task_form.draft() {
        let mut spans = vec![Span::styled(
            " + ",
            Style::default().fg(theme.highlight).bg(bg),
        )];
        if draft.text.is_empty() {
            spans.push(Span::styled(
                "Новая задача...",
                Style::default().fg(theme.dim).bg(bg),
            ));
        } else {
            spans.push(Span::styled(
                draft.text.clone(),
                Style::default().fg(theme.text_bright).bg(bg),
            ));
        }
        spans.push(Span::styled(
            "▏",
            Style::default().fg(theme.highlight).bg(bg),
        ));
        lines.push(Line::from(spans));
    } else {
        lines.push(Line::styled(
            " + добавить задачу (a)",
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
    fn shows_title_tasks_and_add_hint() {
        let app = test_app();
        let out = render_to_string(60, 12, |frame, area| {
            render_tasks_view(frame, &app, area);
        });
        assert!(out.contains("КЛЮЧЕВЫЕ ЗАДАЧИ"));
        assert!(out.contains("[ ] Завершить презентацию проекта"));
        assert!(out.contains("+ добавить задачу (a)"));
    }

    #[test]
    fn completed_task_renders_checked() {
        let mut app = test_app();
        app.board.tasks[1].completed = true;
        let out = render_to_string(60, 12, |frame, area| {
            render_tasks_view(frame, &app, area);
        });
        assert!(out.contains("[x] Созвон с командой в 14:00"));
    }

    #[test]
    fn open_form_shows_draft_placeholder() {
        let mut app = test_app();
        app.section = Section::Tasks;
        app.task_form.start_adding();
        app.mode = Mode::Add;
        let out = render_to_string(60, 12, |frame, area| {
            render_tasks_view(frame, &app, area);
        });
        assert!(out.contains("Новая задача..."));
        assert!(!out.contains("добавить задачу (a)"));
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, EditTarget, Mode, Section};

use super::edit_spans;

/// The quick-links bar above the header. Links render as chips; the
/// active link's url is shown at the right edge when it fits.
pub fn render_links_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = app.section == Section::Links;
    let bg = theme.background;

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];

    for (i, link) in app.board.quick_links.iter().enumerate() {
        let is_cursor = active && app.mode != Mode::Add && i == app.links_cursor;
        let editing_title = app.mode == Mode::Edit
            && app.edit_target == Some(EditTarget::LinkTitle(link.id));
        let editing_url = app.mode == Mode::Edit
            && app.edit_target == Some(EditTarget::LinkUrl(link.id));

        if i > 0 {
            spans.push(Span::styled("  ", Style::default().bg(bg)));
        }

        if (editing_title || editing_url)
            && let Some(editor) = app.editor.as_ref()
        {
            spans.extend(edit_spans(theme, editor));
            continue;
        }

        let style = if is_cursor {
            Style::default()
                .fg(theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.cyan).bg(bg)
        };
        spans.push(Span::styled(link.title.clone(), style));
    }

    if let Some(draft) = app.link_form.draft() {
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
        let shown = |text: &str, placeholder: &str| -> String {
            if text.is_empty() { placeholder.to_string() } else { text.to_string() }
        };
        spans.push(Span::styled("  + ", Style::default().fg(theme.highlight).bg(bg)));
        spans.push(Span::styled(
            shown(&draft.title, "Название"),
            field_style(app.add_field == 0),
        ));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.push(Span::styled(
            shown(&draft.url, "URL"),
            field_style(app.add_field == 1),
        ));
    }

    // Active link's url at the right edge, when there is room
    if active && app.mode == Mode::Navigate
        && let Some(link) = app.cursor_link()
    {
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let url_w = link.url.width();
        let total = area.width as usize;
        if used + url_w + 2 < total {
            spans.push(Span::styled(
                " ".repeat(total - used - url_w - 1),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(
                link.url.clone(),
                Style::default().fg(theme.dim).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{render_to_string, test_app};

    #[test]
    fn shows_all_link_titles() {
        let app = test_app();
        let out = render_to_string(80, 2, |frame, area| {
            render_links_bar(frame, &app, area);
        });
        for title in ["Gmail", "Calendar", "Notion", "Slack", "GitHub", "Figma"] {
            assert!(out.contains(title), "missing {}", title);
        }
    }

    #[test]
    fn active_cursor_shows_url() {
        let mut app = test_app();
        app.section = Section::Links;
        let out = render_to_string(80, 2, |frame, area| {
            render_links_bar(frame, &app, area);
        });
        assert!(out.contains("https://mail.google.com"));
    }

    #[test]
    fn open_form_shows_field_placeholders() {
        let mut app = test_app();
        app.section = Section::Links;
        app.link_form.start_adding();
        app.mode = Mode::Add;
        let out = render_to_string(80, 2, |frame, area| {
            render_links_bar(frame, &app, area);
        });
        assert!(out.contains("Название"));
        assert!(out.contains("URL"));
    }
}

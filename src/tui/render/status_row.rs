use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, Section};

/// The bottom status row: a one-shot message if present, otherwise
/// key hints for the current mode.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let text = if let Some(msg) = &app.status_message {
        format!(" {}", msg)
    } else if !app.show_key_hints {
        String::new()
    } else {
        match app.mode {
            Mode::Edit => " enter commit · esc cancel".to_string(),
            Mode::Add => " enter add · tab field · esc cancel".to_string(),
            Mode::Navigate => {
                let extra = match app.section {
                    Section::Tasks => " · space toggle",
                    Section::Schedule => " · t time · T kind",
                    Section::Links => " · u url",
                    Section::Focus => "",
                };
                format!(
                    " tab section · j/k move · enter edit · a add · d delete{} · q quit",
                    extra
                )
            }
        }
    };

    let style = if app.status_message.is_some() {
        Style::default().fg(theme.yellow).bg(theme.background)
    } else {
        Style::default().fg(theme.dim).bg(theme.background)
    };

    frame.render_widget(Paragraph::new(Line::styled(text, style)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{render_to_string, test_app};

    #[test]
    fn navigate_hints_include_section_extras() {
        let mut app = test_app();
        app.section = Section::Tasks;
        let out = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(out.contains("space toggle"));
    }

    #[test]
    fn status_message_wins_over_hints() {
        let mut app = test_app();
        app.status_message = Some("save failed: disk full".into());
        let out = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(out.contains("save failed: disk full"));
        assert!(!out.contains("q quit"));
    }

    #[test]
    fn hints_can_be_disabled() {
        let mut app = test_app();
        app.show_key_hints = false;
        let out = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(out.trim(), "");
    }
}

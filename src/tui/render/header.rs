use chrono::{Datelike, Local};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Weekday names, indexed by days-from-Sunday as in the original card
pub const RU_WEEKDAYS: [&str; 7] = [
    "Воскресенье",
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
];

/// Month names in genitive case, for "23 августа 2026"
pub const RU_MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// The date header: weekday on top, "day month year" below. Derived
/// from the local wall clock at render time; nothing is stored.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let now = Local::now();
    let weekday = RU_WEEKDAYS[now.weekday().num_days_from_sunday() as usize];
    let date = format!(
        "{} {} {}",
        now.day(),
        RU_MONTHS[now.month0() as usize],
        now.year()
    );

    let lines = vec![
        Line::styled(
            format!(" {}", weekday),
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(format!(" {}", date), Style::default().fg(app.theme.dim)),
    ];

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_table_matches_chrono_indexing() {
        use chrono::Weekday;
        // num_days_from_sunday: Sun=0 … Sat=6
        assert_eq!(RU_WEEKDAYS[Weekday::Sun.num_days_from_sunday() as usize], "Воскресенье");
        assert_eq!(RU_WEEKDAYS[Weekday::Mon.num_days_from_sunday() as usize], "Понедельник");
        assert_eq!(RU_WEEKDAYS[Weekday::Sat.num_days_from_sunday() as usize], "Суббота");
    }

    #[test]
    fn month_table_is_zero_indexed() {
        assert_eq!(RU_MONTHS[0], "января");
        assert_eq!(RU_MONTHS[11], "декабря");
    }
}

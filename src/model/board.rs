use serde::{Deserialize, Serialize};

/// Presentation style for a schedule entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Meeting,
    Focus,
    Break,
}

impl EntryKind {
    /// Label shown in the TUI for this kind
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::Meeting => "встреча",
            EntryKind::Focus => "фокус",
            EntryKind::Break => "перерыв",
        }
    }

    /// Cycle meeting → focus → break → meeting
    pub fn next(self) -> EntryKind {
        match self {
            EntryKind::Meeting => EntryKind::Focus,
            EntryKind::Focus => EntryKind::Break,
            EntryKind::Break => EntryKind::Meeting,
        }
    }

    pub fn parse(s: &str) -> Option<EntryKind> {
        match s {
            "meeting" => Some(EntryKind::Meeting),
            "focus" => Some(EntryKind::Focus),
            "break" => Some(EntryKind::Break),
            _ => None,
        }
    }
}

/// A single task on the card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// One entry in the daily schedule. `time` is free-form text, not a
/// validated clock time, and entries are never auto-sorted by it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: u64,
    pub time: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// A quick link shown in the bar above the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub id: u64,
    pub title: String,
    pub url: String,
}

/// The whole persisted document. Saved as one JSON object with the
/// original camelCase field names; always written as a unit.
///
/// Deserialization is strict on purpose: no field defaults, so a
/// document missing a field (or carrying a wrong-typed one) is
/// rejected as a whole and the loader falls back to [`Board::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub tasks: Vec<Task>,
    pub schedule: Vec<ScheduleItem>,
    pub quick_links: Vec<QuickLink>,
    pub week_focus: String,
    pub month_focus: String,
    pub quarter_focus: String,
    pub quote: String,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            tasks: vec![
                task(1, "Завершить презентацию проекта"),
                task(2, "Созвон с командой в 14:00"),
                task(3, "Отправить отчёт за неделю"),
            ],
            schedule: vec![
                entry(1, "09:00", "Планирование дня", EntryKind::Focus),
                entry(2, "10:30", "Статус-митинг", EntryKind::Meeting),
                entry(3, "12:00", "Работа над проектом", EntryKind::Focus),
                entry(4, "14:00", "Созвон с командой", EntryKind::Meeting),
                entry(5, "16:00", "Перерыв", EntryKind::Break),
                entry(6, "17:00", "Ревью задач", EntryKind::Focus),
            ],
            quick_links: vec![
                link(1, "Gmail", "https://mail.google.com"),
                link(2, "Calendar", "https://calendar.google.com"),
                link(3, "Notion", "https://notion.so"),
                link(4, "Slack", "https://slack.com"),
                link(5, "GitHub", "https://github.com"),
                link(6, "Figma", "https://figma.com"),
            ],
            week_focus: "Запуск нового продукта. Фокус на качестве и деталях.".into(),
            month_focus: "Закрыть квартальные OKR. Подготовить демо для инвесторов.".into(),
            quarter_focus: "Масштабирование продукта на 3 новых рынка.".into(),
            quote: "Делай сегодня то, что другие не хотят — завтра будешь жить так, как другие не могут."
                .into(),
        }
    }
}

fn task(id: u64, text: &str) -> Task {
    Task {
        id,
        text: text.into(),
        completed: false,
    }
}

fn entry(id: u64, time: &str, title: &str, kind: EntryKind) -> ScheduleItem {
    ScheduleItem {
        id,
        time: time.into(),
        title: title.into(),
        kind,
    }
}

fn link(id: u64, title: &str, url: &str) -> QuickLink {
    QuickLink {
        id,
        title: title.into(),
        url: url.into(),
    }
}

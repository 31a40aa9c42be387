use crate::model::{Board, QuickLink, ScheduleItem, Task};

/// A partial board. Every committed edit becomes one of these and is
/// merged shallowly into the current board by [`BoardPatch::apply`];
/// the result is then persisted as a whole.
#[derive(Debug, Clone, Default)]
pub struct BoardPatch {
    pub tasks: Option<Vec<Task>>,
    pub schedule: Option<Vec<ScheduleItem>>,
    pub quick_links: Option<Vec<QuickLink>>,
    pub week_focus: Option<String>,
    pub month_focus: Option<String>,
    pub quarter_focus: Option<String>,
    pub quote: Option<String>,
}

impl BoardPatch {
    pub fn tasks(tasks: Vec<Task>) -> Self {
        BoardPatch {
            tasks: Some(tasks),
            ..Default::default()
        }
    }

    pub fn schedule(schedule: Vec<ScheduleItem>) -> Self {
        BoardPatch {
            schedule: Some(schedule),
            ..Default::default()
        }
    }

    pub fn quick_links(quick_links: Vec<QuickLink>) -> Self {
        BoardPatch {
            quick_links: Some(quick_links),
            ..Default::default()
        }
    }

    pub fn week_focus(text: String) -> Self {
        BoardPatch {
            week_focus: Some(text),
            ..Default::default()
        }
    }

    pub fn month_focus(text: String) -> Self {
        BoardPatch {
            month_focus: Some(text),
            ..Default::default()
        }
    }

    pub fn quarter_focus(text: String) -> Self {
        BoardPatch {
            quarter_focus: Some(text),
            ..Default::default()
        }
    }

    pub fn quote(text: String) -> Self {
        BoardPatch {
            quote: Some(text),
            ..Default::default()
        }
    }

    /// Shallow merge: fields present in the patch replace the board's,
    /// absent fields are left alone.
    pub fn apply(self, board: &mut Board) {
        if let Some(tasks) = self.tasks {
            board.tasks = tasks;
        }
        if let Some(schedule) = self.schedule {
            board.schedule = schedule;
        }
        if let Some(quick_links) = self.quick_links {
            board.quick_links = quick_links;
        }
        if let Some(week_focus) = self.week_focus {
            board.week_focus = week_focus;
        }
        if let Some(month_focus) = self.month_focus {
            board.month_focus = month_focus;
        }
        if let Some(quarter_focus) = self.quarter_focus {
            board.quarter_focus = quarter_focus;
        }
        if let Some(quote) = self.quote {
            board.quote = quote;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn apply_replaces_only_present_fields() {
        let mut board = Board::default();
        let before = board.clone();

        BoardPatch::week_focus("Новый фокус".into()).apply(&mut board);

        assert_eq!(board.week_focus, "Новый фокус");
        assert_eq!(board.tasks, before.tasks);
        assert_eq!(board.schedule, before.schedule);
        assert_eq!(board.quick_links, before.quick_links);
        assert_eq!(board.month_focus, before.month_focus);
        assert_eq!(board.quarter_focus, before.quarter_focus);
        assert_eq!(board.quote, before.quote);
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut board = Board::default();
        let before = board.clone();
        BoardPatch::default().apply(&mut board);
        assert_eq!(board, before);
    }

    #[test]
    fn collection_patch_replaces_whole_collection() {
        let mut board = Board::default();
        BoardPatch::tasks(Vec::new()).apply(&mut board);
        assert!(board.tasks.is_empty());
        // Other collections untouched
        assert_eq!(board.schedule.len(), 6);
    }
}

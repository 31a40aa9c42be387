use crate::model::{Board, EntryKind, QuickLink, ScheduleItem, Task};
use crate::ops::collection::{is_non_empty, next_id, remove_item, update_item};

/// Error type for id-addressed board operations. Only the CLI surfaces
/// these; the TUI keeps silent no-op semantics for the same cases.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("task not found: {0}")]
    TaskNotFound(u64),
    #[error("schedule entry not found: {0}")]
    EntryNotFound(u64),
    #[error("link not found: {0}")]
    LinkNotFound(u64),
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("unknown entry kind: {0} (expected meeting, focus, or break)")]
    UnknownKind(String),
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// Append a task. Returns the assigned id.
pub fn add_task(board: &mut Board, text: &str) -> Result<u64, BoardError> {
    if !is_non_empty(text) {
        return Err(BoardError::EmptyField("text"));
    }
    let id = next_id(&board.tasks);
    board.tasks.push(Task {
        id,
        text: text.trim().to_string(),
        completed: false,
    });
    Ok(id)
}

/// Toggle completion. Returns the new `completed` value.
pub fn toggle_task(board: &mut Board, id: u64) -> Result<bool, BoardError> {
    if !board.tasks.iter().any(|t| t.id == id) {
        return Err(BoardError::TaskNotFound(id));
    }
    board.tasks = update_item(&board.tasks, id, |t| t.completed = !t.completed);
    Ok(board.tasks.iter().find(|t| t.id == id).is_some_and(|t| t.completed))
}

pub fn edit_task(board: &mut Board, id: u64, text: &str) -> Result<(), BoardError> {
    if !board.tasks.iter().any(|t| t.id == id) {
        return Err(BoardError::TaskNotFound(id));
    }
    let text = text.to_string();
    board.tasks = update_item(&board.tasks, id, |t| t.text = text);
    Ok(())
}

pub fn remove_task(board: &mut Board, id: u64) -> Result<(), BoardError> {
    if !board.tasks.iter().any(|t| t.id == id) {
        return Err(BoardError::TaskNotFound(id));
    }
    board.tasks = remove_item(&board.tasks, id);
    Ok(())
}

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// Append a schedule entry. Returns the assigned id.
pub fn add_event(
    board: &mut Board,
    time: &str,
    title: &str,
    kind: EntryKind,
) -> Result<u64, BoardError> {
    if !is_non_empty(time) {
        return Err(BoardError::EmptyField("time"));
    }
    if !is_non_empty(title) {
        return Err(BoardError::EmptyField("title"));
    }
    let id = next_id(&board.schedule);
    board.schedule.push(ScheduleItem {
        id,
        time: time.trim().to_string(),
        title: title.trim().to_string(),
        kind,
    });
    Ok(id)
}

pub fn remove_event(board: &mut Board, id: u64) -> Result<(), BoardError> {
    if !board.schedule.iter().any(|e| e.id == id) {
        return Err(BoardError::EntryNotFound(id));
    }
    board.schedule = remove_item(&board.schedule, id);
    Ok(())
}

// ---------------------------------------------------------------------------
// Quick links
// ---------------------------------------------------------------------------

/// Append a quick link. Returns the assigned id.
pub fn add_link(board: &mut Board, title: &str, url: &str) -> Result<u64, BoardError> {
    if !is_non_empty(title) {
        return Err(BoardError::EmptyField("title"));
    }
    if !is_non_empty(url) {
        return Err(BoardError::EmptyField("url"));
    }
    let id = next_id(&board.quick_links);
    board.quick_links.push(QuickLink {
        id,
        title: title.trim().to_string(),
        url: url.trim().to_string(),
    });
    Ok(id)
}

pub fn remove_link(board: &mut Board, id: u64) -> Result<(), BoardError> {
    if !board.quick_links.iter().any(|l| l.id == id) {
        return Err(BoardError::LinkNotFound(id));
    }
    board.quick_links = remove_item(&board.quick_links, id);
    Ok(())
}

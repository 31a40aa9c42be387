use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::patch::BoardPatch;
use crate::tui::app::{App, Mode, Section};

/// Key handling for an open add form. Enter confirms (silently refused
/// while the draft is missing a required field, the form stays open),
/// Esc discards the draft, Tab moves between the form's fields.
pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => cancel(app),
        KeyCode::Enter => confirm(app),
        KeyCode::Tab | KeyCode::Down => cycle_field(app, 1),
        KeyCode::BackTab | KeyCode::Up => cycle_field(app, -1),
        KeyCode::Char(c) => type_char(app, c),
        KeyCode::Backspace => erase_char(app),
        _ => {}
    }
}

fn field_count(app: &App) -> usize {
    match app.section {
        Section::Tasks => 1,
        Section::Links => 2,
        // time, title, kind
        Section::Schedule => 3,
        Section::Focus => 1,
    }
}

fn cycle_field(app: &mut App, delta: isize) {
    let count = field_count(app) as isize;
    let next = (app.add_field as isize + delta).rem_euclid(count);
    app.add_field = next as usize;
}

fn cancel(app: &mut App) {
    app.task_form.cancel_adding();
    app.event_form.cancel_adding();
    app.link_form.cancel_adding();
    app.add_field = 0;
    app.mode = Mode::Navigate;
}

fn confirm(app: &mut App) {
    let patch = match app.section {
        Section::Tasks => app
            .task_form
            .confirm_add(&app.board.tasks)
            .map(BoardPatch::tasks),
        Section::Schedule => app
            .event_form
            .confirm_add(&app.board.schedule)
            .map(BoardPatch::schedule),
        Section::Links => app
            .link_form
            .confirm_add(&app.board.quick_links)
            .map(BoardPatch::quick_links),
        Section::Focus => None,
    };

    // Invalid draft: stay in the form, no message. Matching the
    // original's low-friction add flow.
    let Some(patch) = patch else { return };
    app.apply_patch(patch);

    // Land the cursor on the new item (appended at the end)
    match app.section {
        Section::Tasks => app.tasks_cursor = app.board.tasks.len().saturating_sub(1),
        Section::Schedule => app.schedule_cursor = app.board.schedule.len().saturating_sub(1),
        Section::Links => app.links_cursor = app.board.quick_links.len().saturating_sub(1),
        Section::Focus => {}
    }
    app.add_field = 0;
    app.mode = Mode::Navigate;
}

fn type_char(app: &mut App, c: char) {
    match app.section {
        Section::Tasks => {
            if let Some(draft) = app.task_form.draft_mut() {
                draft.text.push(c);
            }
        }
        Section::Schedule => {
            let field = app.add_field;
            if let Some(draft) = app.event_form.draft_mut() {
                match field {
                    0 => draft.time.push(c),
                    1 => draft.title.push(c),
                    // Kind field: space cycles, typing does nothing
                    _ => {
                        if c == ' ' {
                            draft.kind = draft.kind.next();
                        }
                    }
                }
            }
        }
        Section::Links => {
            let field = app.add_field;
            if let Some(draft) = app.link_form.draft_mut() {
                match field {
                    0 => draft.title.push(c),
                    _ => draft.url.push(c),
                }
            }
        }
        Section::Focus => {}
    }
}

fn erase_char(app: &mut App) {
    match app.section {
        Section::Tasks => {
            if let Some(draft) = app.task_form.draft_mut() {
                draft.text.pop();
            }
        }
        Section::Schedule => {
            let field = app.add_field;
            if let Some(draft) = app.event_form.draft_mut() {
                match field {
                    0 => draft.time.pop(),
                    1 => draft.title.pop(),
                    _ => None,
                };
            }
        }
        Section::Links => {
            let field = app.add_field;
            if let Some(draft) = app.link_form.draft_mut() {
                match field {
                    0 => draft.title.pop(),
                    _ => draft.url.pop(),
                };
            }
        }
        Section::Focus => {}
    }
}

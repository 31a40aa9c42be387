use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::collection::{remove_item, update_item};
use crate::ops::patch::BoardPatch;
use crate::tui::app::{App, EditTarget, FocusField, Mode, Section};
use crate::tui::editor::FieldEditor;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Tab => app.section = app.section.next(),
        KeyCode::BackTab => app.section = app.section.prev(),
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('h') | KeyCode::Left if app.section == Section::Links => {
            move_cursor(app, -1);
        }
        KeyCode::Char('l') | KeyCode::Right if app.section == Section::Links => {
            move_cursor(app, 1);
        }
        KeyCode::Enter => begin_primary_edit(app),
        KeyCode::Char(' ') if app.section == Section::Tasks => toggle_task(app),
        KeyCode::Char('a') => start_add(app),
        KeyCode::Char('d') => delete_under_cursor(app),
        KeyCode::Char('t') if app.section == Section::Schedule => begin_time_edit(app),
        KeyCode::Char('T') if app.section == Section::Schedule => cycle_event_kind(app),
        KeyCode::Char('u') if app.section == Section::Links => begin_url_edit(app),
        _ => {}
    }
}

fn section_len(app: &App) -> usize {
    match app.section {
        Section::Links => app.board.quick_links.len(),
        Section::Tasks => app.board.tasks.len(),
        Section::Schedule => app.board.schedule.len(),
        Section::Focus => FocusField::ALL.len(),
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = section_len(app);
    if len == 0 {
        return;
    }
    let cursor = match app.section {
        Section::Links => &mut app.links_cursor,
        Section::Tasks => &mut app.tasks_cursor,
        Section::Schedule => &mut app.schedule_cursor,
        Section::Focus => &mut app.focus_cursor,
    };
    *cursor = cursor
        .saturating_add_signed(delta)
        .min(len - 1);
}

/// Enter edit mode on the primary text field of the item under the
/// cursor, seeding the buffer from the committed value.
fn begin_primary_edit(app: &mut App) {
    let (target, value) = match app.section {
        Section::Tasks => match app.cursor_task() {
            Some(t) => (EditTarget::TaskText(t.id), t.text.clone()),
            None => return,
        },
        Section::Schedule => match app.cursor_event() {
            Some(e) => (EditTarget::EventTitle(e.id), e.title.clone()),
            None => return,
        },
        Section::Links => match app.cursor_link() {
            Some(l) => (EditTarget::LinkTitle(l.id), l.title.clone()),
            None => return,
        },
        Section::Focus => {
            let field = app.focus_field();
            (EditTarget::Focus(field), field.value(&app.board).to_string())
        }
    };
    app.editor = Some(FieldEditor::seed(&value));
    app.edit_target = Some(target);
    app.mode = Mode::Edit;
}

fn begin_time_edit(app: &mut App) {
    let Some(entry) = app.cursor_event() else { return };
    let (id, time) = (entry.id, entry.time.clone());
    app.editor = Some(FieldEditor::seed(&time));
    app.edit_target = Some(EditTarget::EventTime(id));
    app.mode = Mode::Edit;
}

fn begin_url_edit(app: &mut App) {
    let Some(link) = app.cursor_link() else { return };
    let (id, url) = (link.id, link.url.clone());
    app.editor = Some(FieldEditor::seed(&url));
    app.edit_target = Some(EditTarget::LinkUrl(id));
    app.mode = Mode::Edit;
}

fn toggle_task(app: &mut App) {
    let Some(task) = app.cursor_task() else { return };
    let id = task.id;
    let tasks = update_item(&app.board.tasks, id, |t| t.completed = !t.completed);
    app.apply_patch(BoardPatch::tasks(tasks));
}

fn cycle_event_kind(app: &mut App) {
    let Some(entry) = app.cursor_event() else { return };
    let id = entry.id;
    let schedule = update_item(&app.board.schedule, id, |e| e.kind = e.kind.next());
    app.apply_patch(BoardPatch::schedule(schedule));
}

fn start_add(app: &mut App) {
    match app.section {
        Section::Tasks => app.task_form.start_adding(),
        Section::Schedule => app.event_form.start_adding(),
        Section::Links => app.link_form.start_adding(),
        // Focus notes are fixed fields; nothing to add
        Section::Focus => return,
    }
    app.add_field = 0;
    app.mode = Mode::Add;
}

/// Delete the item under the cursor. Unknown/empty positions are a
/// silent no-op, matching the card's low-friction editing model.
fn delete_under_cursor(app: &mut App) {
    match app.section {
        Section::Tasks => {
            let Some(task) = app.cursor_task() else { return };
            let tasks = remove_item(&app.board.tasks, task.id);
            app.apply_patch(BoardPatch::tasks(tasks));
        }
        Section::Schedule => {
            let Some(entry) = app.cursor_event() else { return };
            let schedule = remove_item(&app.board.schedule, entry.id);
            app.apply_patch(BoardPatch::schedule(schedule));
        }
        Section::Links => {
            let Some(link) = app.cursor_link() else { return };
            let links = remove_item(&app.board.quick_links, link.id);
            app.apply_patch(BoardPatch::quick_links(links));
        }
        Section::Focus => {}
    }
}

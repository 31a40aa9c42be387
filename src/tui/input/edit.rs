use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::collection::update_item;
use crate::ops::patch::BoardPatch;
use crate::tui::app::{App, EditTarget, Mode};

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let Some(editor) = app.editor.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Enter => commit_edit(app),
        KeyCode::Esc => cancel_edit(app),
        KeyCode::Char(c) => editor.insert(c),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Delete => editor.delete(),
        KeyCode::Left => editor.left(),
        KeyCode::Right => editor.right(),
        KeyCode::Home => editor.home(),
        KeyCode::End => editor.end(),
        _ => {}
    }
}

/// Commit gesture: the buffer becomes the target field's value,
/// expressed as a patch through the single mutation entry point.
fn commit_edit(app: &mut App) {
    let (Some(editor), Some(target)) = (app.editor.take(), app.edit_target.take()) else {
        app.mode = Mode::Navigate;
        return;
    };
    let text = editor.commit();

    let patch = match target {
        EditTarget::TaskText(id) => {
            BoardPatch::tasks(update_item(&app.board.tasks, id, |t| t.text = text))
        }
        EditTarget::EventTime(id) => {
            BoardPatch::schedule(update_item(&app.board.schedule, id, |e| e.time = text))
        }
        EditTarget::EventTitle(id) => {
            BoardPatch::schedule(update_item(&app.board.schedule, id, |e| e.title = text))
        }
        EditTarget::LinkTitle(id) => {
            BoardPatch::quick_links(update_item(&app.board.quick_links, id, |l| l.title = text))
        }
        EditTarget::LinkUrl(id) => {
            BoardPatch::quick_links(update_item(&app.board.quick_links, id, |l| l.url = text))
        }
        EditTarget::Focus(field) => field.patch(text),
    };

    app.apply_patch(patch);
    app.mode = Mode::Navigate;
}

/// Cancel gesture: discard the buffer, the committed value stands.
fn cancel_edit(app: &mut App) {
    app.editor = None;
    app.edit_target = None;
    app.mode = Mode::Navigate;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::{BOARD_FILE, BoardStore};
    use crate::model::AppConfig;
    use crate::tui::app::FocusField;
    use crate::tui::editor::FieldEditor;
    use crossterm::event::KeyEvent;
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> App {
        let store = BoardStore::new(dir.path().join(BOARD_FILE));
        App::new(store.load(), store, &AppConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_edit(app, KeyEvent::from(code));
    }

    #[test]
    fn typed_edit_commits_on_enter() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let id = app.board.tasks[0].id;

        app.editor = Some(FieldEditor::seed(""));
        app.edit_target = Some(EditTarget::TaskText(id));
        app.mode = Mode::Edit;

        for c in "ok".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.board.tasks[0].text, "ok");
        // Committed straight to disk
        assert_eq!(app.store.load().tasks[0].text, "ok");
    }

    #[test]
    fn escape_reverts_to_committed_value() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let before = app.board.week_focus.clone();

        app.editor = Some(FieldEditor::seed(&before));
        app.edit_target = Some(EditTarget::Focus(FocusField::Week));
        app.mode = Mode::Edit;

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('X'));
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.board.week_focus, before);
    }

    #[test]
    fn committing_empty_buffer_clears_the_field() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.editor = Some(FieldEditor::seed(""));
        app.edit_target = Some(EditTarget::Focus(FocusField::Quote));
        app.mode = Mode::Edit;
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.board.quote, "");
    }

    #[test]
    fn commit_to_vanished_id_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let before = app.board.tasks.clone();

        app.editor = Some(FieldEditor::seed("призрак"));
        app.edit_target = Some(EditTarget::TaskText(404));
        app.mode = Mode::Edit;
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.board.tasks, before);
    }
}

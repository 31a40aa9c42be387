use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::store::BoardStore;
use crate::io::watcher::BoardWatcher;
use crate::model::{AppConfig, Board, QuickLink, ScheduleItem, Task};
use crate::ops::collection::ItemManager;
use crate::ops::patch::BoardPatch;

use super::editor::FieldEditor;
use super::input;
use super::render;
use super::theme::Theme;

/// The card's sections, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Links,
    Tasks,
    Schedule,
    Focus,
}

impl Section {
    pub fn next(self) -> Section {
        match self {
            Section::Links => Section::Tasks,
            Section::Tasks => Section::Schedule,
            Section::Schedule => Section::Focus,
            Section::Focus => Section::Links,
        }
    }

    pub fn prev(self) -> Section {
        match self {
            Section::Links => Section::Focus,
            Section::Tasks => Section::Links,
            Section::Schedule => Section::Tasks,
            Section::Focus => Section::Schedule,
        }
    }
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
    Add,
}

/// The four single-string fields of the right-hand column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    Week,
    Month,
    Quarter,
    Quote,
}

impl FocusField {
    pub const ALL: [FocusField; 4] = [
        FocusField::Week,
        FocusField::Month,
        FocusField::Quarter,
        FocusField::Quote,
    ];

    pub fn value(self, board: &Board) -> &str {
        match self {
            FocusField::Week => &board.week_focus,
            FocusField::Month => &board.month_focus,
            FocusField::Quarter => &board.quarter_focus,
            FocusField::Quote => &board.quote,
        }
    }

    pub fn patch(self, text: String) -> BoardPatch {
        match self {
            FocusField::Week => BoardPatch::week_focus(text),
            FocusField::Month => BoardPatch::month_focus(text),
            FocusField::Quarter => BoardPatch::quarter_focus(text),
            FocusField::Quote => BoardPatch::quote(text),
        }
    }
}

/// Which field an open editor commits to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    TaskText(u64),
    EventTime(u64),
    EventTitle(u64),
    LinkTitle(u64),
    LinkUrl(u64),
    Focus(FocusField),
}

/// Main application state. The board is the single source of truth;
/// every mutation goes through [`App::apply_patch`], which merges the
/// patch and persists the whole document.
pub struct App {
    pub board: Board,
    pub store: BoardStore,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub section: Section,
    pub mode: Mode,
    pub should_quit: bool,
    /// Per-section cursors
    pub links_cursor: usize,
    pub tasks_cursor: usize,
    pub schedule_cursor: usize,
    pub focus_cursor: usize,
    /// Open field editor and its commit target (Edit mode)
    pub editor: Option<FieldEditor>,
    pub edit_target: Option<EditTarget>,
    /// Add-form state per collection (at most one is Adding)
    pub task_form: ItemManager<Task>,
    pub event_form: ItemManager<ScheduleItem>,
    pub link_form: ItemManager<QuickLink>,
    /// Focused field index inside the open add form
    pub add_field: usize,
    /// One-shot message for the status row
    pub status_message: Option<String>,
}

impl App {
    pub fn new(board: Board, store: BoardStore, config: &AppConfig) -> Self {
        App {
            board,
            store,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            section: Section::Tasks,
            mode: Mode::Navigate,
            should_quit: false,
            links_cursor: 0,
            tasks_cursor: 0,
            schedule_cursor: 0,
            focus_cursor: 0,
            editor: None,
            edit_target: None,
            task_form: ItemManager::new(),
            event_form: ItemManager::new(),
            link_form: ItemManager::new(),
            add_field: 0,
            status_message: None,
        }
    }

    /// The single mutation entry point: merge the patch into the board
    /// and persist the whole document.
    pub fn apply_patch(&mut self, patch: BoardPatch) {
        patch.apply(&mut self.board);
        if let Err(e) = self.store.save(&self.board) {
            self.status_message = Some(format!("save failed: {}", e));
        }
        self.clamp_cursors();
    }

    /// Replace the board with whatever is on disk (external change).
    pub fn reload_from_disk(&mut self) {
        self.board = self.store.load();
        self.clamp_cursors();
    }

    /// Keep cursors inside their collections after removals/reloads.
    pub fn clamp_cursors(&mut self) {
        self.links_cursor = clamp(self.links_cursor, self.board.quick_links.len());
        self.tasks_cursor = clamp(self.tasks_cursor, self.board.tasks.len());
        self.schedule_cursor = clamp(self.schedule_cursor, self.board.schedule.len());
        self.focus_cursor = clamp(self.focus_cursor, FocusField::ALL.len());
    }

    /// True while any section's add form is open.
    pub fn is_adding(&self) -> bool {
        self.task_form.is_adding() || self.event_form.is_adding() || self.link_form.is_adding()
    }

    /// The focus field under the cursor.
    pub fn focus_field(&self) -> FocusField {
        FocusField::ALL[self.focus_cursor.min(FocusField::ALL.len() - 1)]
    }

    /// Id of the task under the cursor, if any.
    pub fn cursor_task(&self) -> Option<&Task> {
        self.board.tasks.get(self.tasks_cursor)
    }

    pub fn cursor_event(&self) -> Option<&ScheduleItem> {
        self.board.schedule.get(self.schedule_cursor)
    }

    pub fn cursor_link(&self) -> Option<&QuickLink> {
        self.board.quick_links.get(self.links_cursor)
    }
}

fn clamp(cursor: usize, len: usize) -> usize {
    if len == 0 { 0 } else { cursor.min(len - 1) }
}

/// Run the TUI application
pub fn run(data_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config();
    let store = BoardStore::resolve(data_dir, &config);
    let board = store.load();
    let watcher = BoardWatcher::start(store.path()).ok();

    let mut app = App::new(board, store, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&BoardWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        // Pick up external edits, but never underneath an open editor
        // or add form.
        if let Some(watcher) = watcher
            && watcher.poll()
            && app.mode == Mode::Navigate
        {
            app.reload_from_disk();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::BOARD_FILE;
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> App {
        let store = BoardStore::new(dir.path().join(BOARD_FILE));
        App::new(store.load(), store, &AppConfig::default())
    }

    #[test]
    fn apply_patch_persists_immediately() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.apply_patch(BoardPatch::week_focus("Новый фокус".into()));

        assert_eq!(app.board.week_focus, "Новый фокус");
        let reloaded = app.store.load();
        assert_eq!(reloaded.week_focus, "Новый фокус");
    }

    #[test]
    fn clamp_cursors_after_shrink() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.tasks_cursor = 2;
        app.apply_patch(BoardPatch::tasks(vec![app.board.tasks[0].clone()]));
        assert_eq!(app.tasks_cursor, 0);
    }

    #[test]
    fn reload_picks_up_external_write() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        let mut external = Board::default();
        external.quote = "Ничто не предвещало.".into();
        app.store.save(&external).unwrap();

        app.reload_from_disk();
        assert_eq!(app.board.quote, "Ничто не предвещало.");
    }

    #[test]
    fn section_tab_order_cycles() {
        let mut s = Section::Links;
        for _ in 0..4 {
            s = s.next();
        }
        assert_eq!(s, Section::Links);
        assert_eq!(Section::Links.prev(), Section::Focus);
    }
}

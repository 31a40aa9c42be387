use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// A file system watcher for the board file, so an edit from another
/// process (or a second terminal) shows up without restarting.
pub struct BoardWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<()>,
}

impl BoardWatcher {
    /// Start watching the directory that holds the board file.
    /// Watching the parent rather than the file itself survives the
    /// atomic temp-file-and-rename writes the store performs.
    pub fn start(board_path: &Path) -> Result<Self, notify::Error> {
        let dir = board_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let file_name = board_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        let (tx, rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };
                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }
                if event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name.as_os_str()))
                {
                    let _ = tx.send(());
                }
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        Ok(BoardWatcher { _watcher: watcher, rx })
    }

    /// Non-blocking poll: true if the board file changed since the
    /// last call.
    pub fn poll(&self) -> bool {
        let mut changed = false;
        while self.rx.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}

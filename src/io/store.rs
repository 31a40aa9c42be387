use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::{AppConfig, Board};

/// File name of the persistence slot inside the data directory.
pub const BOARD_FILE: &str = "board.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize board: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The default data directory, respecting XDG_DATA_HOME.
pub fn data_dir() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    base.join("daycard")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// The board's persistence slot: one JSON file, read whole, written
/// whole.
#[derive(Debug, Clone)]
pub struct BoardStore {
    path: PathBuf,
}

impl BoardStore {
    pub fn new(path: PathBuf) -> Self {
        BoardStore { path }
    }

    /// Resolve the slot location: an explicit `-C` directory wins,
    /// then the config's `[storage] path`, then the XDG default.
    pub fn resolve(dir_override: Option<&Path>, config: &AppConfig) -> Self {
        let path = match (dir_override, &config.storage.path) {
            (Some(dir), _) => dir.join(BOARD_FILE),
            (None, Some(path)) => path.clone(),
            (None, None) => data_dir().join(BOARD_FILE),
        };
        BoardStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the board, failing soft: an absent slot, unreadable file,
    /// non-JSON content, or a JSON document that does not match the
    /// board shape all yield the built-in default board.
    pub fn load(&self) -> Board {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Board::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Serialize the whole board and write it to the slot. The write
    /// goes through a temp file in the same directory and a rename,
    /// so the slot never holds a half-written document.
    pub fn save(&self, board: &Board) -> Result<(), StoreError> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| StoreError::WriteError {
            path: parent.to_path_buf(),
            source: e,
        })?;

        let json = serde_json::to_string_pretty(board)?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path)
            .map_err(|e| StoreError::WriteError {
                path: self.path.clone(),
                source: e.error,
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> BoardStore {
        BoardStore::new(dir.path().join(BOARD_FILE))
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut board = Board::default();
        board.week_focus = "Новый фокус".into();
        board.tasks[0].completed = true;

        store.save(&board).unwrap();
        assert_eq!(store.load(), board);
    }

    #[test]
    fn absent_slot_yields_default() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), Board::default());
    }

    #[test]
    fn non_json_content_yields_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(BOARD_FILE), "not json {{{").unwrap();
        assert_eq!(store_in(&dir).load(), Board::default());
    }

    #[test]
    fn shape_mismatch_yields_default() {
        let dir = TempDir::new().unwrap();
        // Valid JSON, wrong shape: tasks is a string, focus fields missing
        fs::write(dir.path().join(BOARD_FILE), r#"{"tasks":"nope"}"#).unwrap();
        assert_eq!(store_in(&dir).load(), Board::default());
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let store = BoardStore::new(dir.path().join("deep").join("nested").join(BOARD_FILE));
        store.save(&Board::default()).unwrap();
        assert_eq!(store.load(), Board::default());
    }

    #[test]
    fn save_overwrites_whole_document() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&Board::default()).unwrap();
        let mut board = Board::default();
        board.tasks.clear();
        store.save(&board).unwrap();

        assert!(store.load().tasks.is_empty());
    }

    #[test]
    fn resolve_prefers_explicit_dir_over_config() {
        let config = AppConfig {
            storage: crate::model::StorageConfig {
                path: Some(PathBuf::from("/from/config.json")),
            },
            ..Default::default()
        };
        let store = BoardStore::resolve(Some(Path::new("/explicit")), &config);
        assert_eq!(store.path(), Path::new("/explicit").join(BOARD_FILE));

        let store = BoardStore::resolve(None, &config);
        assert_eq!(store.path(), Path::new("/from/config.json"));
    }
}

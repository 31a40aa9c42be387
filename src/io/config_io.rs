use std::fs;
use std::path::{Path, PathBuf};

use crate::model::AppConfig;

/// Get the config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("daycard").join("config.toml")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read the app config. The config is cosmetic, so a missing or
/// malformed file falls back to defaults rather than blocking startup.
pub fn read_config() -> AppConfig {
    read_config_from(&config_path())
}

pub fn read_config_from(path: &Path) -> AppConfig {
    let Ok(content) = fs::read_to_string(path) else {
        return AppConfig::default();
    };
    toml::from_str(&content).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = read_config_from(&dir.path().join("config.toml"));
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not toml [[[").unwrap();
        let config = read_config_from(&path);
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn reads_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r##"
[ui]
show_key_hints = false

[ui.colors]
background = "#000000"
"##,
        )
        .unwrap();
        let config = read_config_from(&path);
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("background").unwrap(), "#000000");
    }
}

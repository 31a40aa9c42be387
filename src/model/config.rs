use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// App configuration from config.toml. Read-only: the program never
/// writes it back, so no round-trip editing layer is needed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Override the board file location (default: the XDG data dir)
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides from [ui.colors], hex strings like "#FB4196"
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_parses_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.storage.path.is_none());
        assert!(config.ui.show_key_hints);
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn parses_sections() {
        let config: AppConfig = toml::from_str(
            r##"
[storage]
path = "/tmp/board.json"

[ui]
show_key_hints = false

[ui.colors]
highlight = "#FF0000"
"##,
        )
        .unwrap();
        assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/board.json")));
        assert!(!config.ui.show_key_hints);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FF0000");
    }
}

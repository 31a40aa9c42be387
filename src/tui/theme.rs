use ratatui::style::Color;

use crate::model::{EntryKind, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub green: Color,
    pub red: Color,
    pub yellow: Color,
    pub cyan: Color,
    /// Accent for meeting entries
    pub meeting: Color,
    /// Accent for focus entries
    pub focus: Color,
    /// Accent for break entries
    pub pause: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            meeting: Color::Rgb(0x44, 0x88, 0xFF),
            focus: Color::Rgb(0xCC, 0x66, 0xFF),
            pause: Color::Rgb(0x7D, 0x78, 0xBF),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the app config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "green" => theme.green = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "cyan" => theme.cyan = color,
                    "meeting" => theme.meeting = color,
                    "focus" => theme.focus = color,
                    "break" => theme.pause = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Accent color for a schedule entry kind
    pub fn kind_color(&self, kind: EntryKind) -> Color {
        match kind {
            EntryKind::Meeting => self.meeting,
            EntryKind::Focus => self.focus,
            EntryKind::Break => self.pause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#FF4444"),
            Some(Color::Rgb(0xFF, 0x44, 0x44))
        );
        assert_eq!(parse_hex_color("FF4444"), None); // missing #
        assert_eq!(parse_hex_color("#FF44"), None); // too short
        assert_eq!(parse_hex_color("#ZZZZZZ"), None); // invalid hex
    }

    #[test]
    fn test_from_config_overrides() {
        let mut ui = UiConfig::default();
        ui.colors.insert("background".into(), "#000000".into());
        ui.colors.insert("break".into(), "#112233".into());
        ui.colors.insert("bogus".into(), "#445566".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        assert_eq!(theme.pause, Color::Rgb(0x11, 0x22, 0x33));
        // Unchanged defaults still present
        assert_eq!(theme.text, Color::Rgb(0xB0, 0xAA, 0xFF));
    }

    #[test]
    fn test_kind_color() {
        let theme = Theme::default();
        assert_eq!(theme.kind_color(EntryKind::Meeting), theme.meeting);
        assert_eq!(theme.kind_color(EntryKind::Focus), theme.focus);
        assert_eq!(theme.kind_color(EntryKind::Break), theme.pause);
    }
}

use ratatui::style::Color;

use crate::model::UiConfig;

use super::app::MessageKind;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x06, 0x14, 0x0C),
            text: Color::Rgb(0xC8, 0xE6, 0xC9),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xA3, 0xE6, 0x35),
            dim: Color::Rgb(0x6B, 0x8F, 0x71),
            red: Color::Rgb(0xFF, 0x55, 0x55),
            yellow: Color::Rgb(0xFF, 0xD5, 0x4F),
            green: Color::Rgb(0x66, 0xE0, 0x8A),
            selection_bg: Color::Rgb(0x1B, 0x3A, 0x24),
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
    /// Create a theme from UI config, falling back to defaults
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
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "selection_bg" => theme.selection_bg = color,
                    _ => {}
                }
            }
        }

        theme
    }

    /// Accent color for a message popup
    pub fn message_color(&self, kind: MessageKind) -> Color {
        match kind {
            MessageKind::Info => self.green,
            MessageKind::Warning => self.yellow,
            MessageKind::Error => self.red,
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
        ui.colors.insert("highlight".into(), "not-a-color".into());
        ui.colors.insert("unknown_slot".into(), "#123456".into());

        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0, 0, 0));
        // Invalid value keeps the default
        assert_eq!(theme.highlight, Color::Rgb(0xA3, 0xE6, 0x35));
        assert_eq!(theme.text, Color::Rgb(0xC8, 0xE6, 0xC9));
    }

    #[test]
    fn test_message_color() {
        let theme = Theme::default();
        assert_eq!(theme.message_color(MessageKind::Info), theme.green);
        assert_eq!(theme.message_color(MessageKind::Warning), theme.yellow);
        assert_eq!(theme.message_color(MessageKind::Error), theme.red);
    }
}

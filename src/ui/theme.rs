use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub accent: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub hint: String,
    pub cursor_bg: String,
    pub cursor_fg: String,
    pub good: String,
    pub good_bg: String,
    pub bad: String,
    pub bad_bg: String,
    pub dot_filled: String,
    pub dot_empty: String,
    pub error: String,
    pub reward: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // Try user themes dir
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir.join("splitr").join("themes").join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        // Try bundled themes
        let filename = format!("{name}.toml");
        if let Some(file) = ThemeAssets::get(&filename) {
            if let Ok(content) = std::str::from_utf8(file.data.as_ref()) {
                if let Ok(theme) = toml::from_str::<Theme>(content) {
                    return Some(theme);
                }
            }
        }

        None
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("terminal-default").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#121212".to_string(),
            fg: "#d4d4d4".to_string(),
            accent: "#5fafff".to_string(),
            border: "#3a3a3a".to_string(),
            border_focused: "#5fafff".to_string(),
            header_bg: "#1c1c1c".to_string(),
            header_fg: "#d4d4d4".to_string(),
            hint: "#6c6c6c".to_string(),
            cursor_bg: "#d4d4d4".to_string(),
            cursor_fg: "#121212".to_string(),
            good: "#87d787".to_string(),
            good_bg: "#1f2e1f".to_string(),
            bad: "#ff8787".to_string(),
            bad_bg: "#332020".to_string(),
            dot_filled: "#ffd75f".to_string(),
            dot_empty: "#3a3a3a".to_string(),
            error: "#ff8787".to_string(),
            reward: "#ffd75f".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn hint(&self) -> Color { Self::parse_color(&self.hint) }
    pub fn cursor_bg(&self) -> Color { Self::parse_color(&self.cursor_bg) }
    pub fn cursor_fg(&self) -> Color { Self::parse_color(&self.cursor_fg) }
    pub fn good(&self) -> Color { Self::parse_color(&self.good) }
    pub fn good_bg(&self) -> Color { Self::parse_color(&self.good_bg) }
    pub fn bad(&self) -> Color { Self::parse_color(&self.bad) }
    pub fn bad_bg(&self) -> Color { Self::parse_color(&self.bad_bg) }
    pub fn dot_filled(&self) -> Color { Self::parse_color(&self.dot_filled) }
    pub fn dot_empty(&self) -> Color { Self::parse_color(&self.dot_empty) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn reward(&self) -> Color { Self::parse_color(&self.reward) }
}

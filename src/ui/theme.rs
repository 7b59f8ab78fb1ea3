//! Colour themes
//!
//! Provides:
//! - Theme struct with all UI colours, including suit colours
//! - Built-in presets (default, catppuccin, nord, gruvbox)
//! - Hex colour parsing for config overrides

use ratatui::style::Color;
use thiserror::Error;

use crate::deck::CardColor;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Background of the tile under the cursor
    pub cursor_bg: Color,
    /// Accent color (borders, active group)
    pub accent: Color,
    /// Dimmed text (hints, inactive groups)
    pub dimmed: Color,
    /// Drawn cards and secondary borders
    pub dimmed_alt: Color,
    /// Hearts, diamonds, big joker
    pub red_suit: Color,
    /// Clubs, spades, small joker, custom labels
    pub black_suit: Color,
    /// Edit selection marker and edit toolbar
    pub selection: Color,
    /// Status messages for refused operations
    pub warning: Color,
    /// Status messages for completed operations
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::felt()
    }
}

impl Theme {
    /// Default theme - card-table green accent on near black
    pub fn felt() -> Self {
        Self {
            background: Color::Rgb(13, 17, 22),      // #0d1116
            foreground: Color::Rgb(229, 234, 241),   // #e5eaf1
            cursor_bg: Color::Rgb(20, 28, 42),       // #141c2a
            accent: Color::Rgb(22, 163, 74),         // #16a34a
            dimmed: Color::Rgb(156, 163, 175),       // #9ca3af
            dimmed_alt: Color::Rgb(75, 85, 99),      // #4b5563
            red_suit: Color::Rgb(239, 68, 68),       // #ef4444
            black_suit: Color::Rgb(229, 234, 241),   // #e5eaf1
            selection: Color::Rgb(234, 179, 8),      // #eab308
            warning: Color::Rgb(249, 115, 22),       // #f97316
            success: Color::Rgb(34, 197, 94),        // #22c55e
        }
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            background: Color::Rgb(30, 30, 46),      // #1e1e2e (base)
            foreground: Color::Rgb(205, 214, 244),   // #cdd6f4 (text)
            cursor_bg: Color::Rgb(49, 50, 68),       // #313244 (surface0)
            accent: Color::Rgb(137, 180, 250),       // #89b4fa (blue)
            dimmed: Color::Rgb(166, 173, 200),       // #a6adc8 (subtext0)
            dimmed_alt: Color::Rgb(88, 91, 112),     // #585b70 (surface2)
            red_suit: Color::Rgb(243, 139, 168),     // #f38ba8 (red)
            black_suit: Color::Rgb(205, 214, 244),   // #cdd6f4 (text)
            selection: Color::Rgb(249, 226, 175),    // #f9e2af (yellow)
            warning: Color::Rgb(250, 179, 135),      // #fab387 (peach)
            success: Color::Rgb(166, 227, 161),      // #a6e3a1 (green)
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),      // #2e3440 (nord0)
            foreground: Color::Rgb(236, 239, 244),   // #eceff4 (nord6)
            cursor_bg: Color::Rgb(67, 76, 94),       // #434c5e (nord2)
            accent: Color::Rgb(136, 192, 208),       // #88c0d0 (nord8)
            dimmed: Color::Rgb(216, 222, 233),       // #d8dee9 (nord4)
            dimmed_alt: Color::Rgb(76, 86, 106),     // #4c566a (nord3)
            red_suit: Color::Rgb(191, 97, 106),      // #bf616a (nord11)
            black_suit: Color::Rgb(236, 239, 244),   // #eceff4 (nord6)
            selection: Color::Rgb(235, 203, 139),    // #ebcb8b (nord13)
            warning: Color::Rgb(208, 135, 112),      // #d08770 (nord12)
            success: Color::Rgb(163, 190, 140),      // #a3be8c (nord14)
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),      // #282828 (bg)
            foreground: Color::Rgb(235, 219, 178),   // #ebdbb2 (fg)
            cursor_bg: Color::Rgb(60, 56, 54),       // #3c3836 (bg1)
            accent: Color::Rgb(215, 153, 33),        // #d79921 (yellow)
            dimmed: Color::Rgb(168, 153, 132),       // #a89984 (gray)
            dimmed_alt: Color::Rgb(102, 92, 84),     // #665c54 (bg3)
            red_suit: Color::Rgb(251, 73, 52),       // #fb4934 (bright red)
            black_suit: Color::Rgb(235, 219, 178),   // #ebdbb2 (fg)
            selection: Color::Rgb(250, 189, 47),     // #fabd2f (bright yellow)
            warning: Color::Rgb(254, 128, 25),       // #fe8019 (orange)
            success: Color::Rgb(184, 187, 38),       // #b8bb26 (bright green)
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "felt" | "default" => Some(Self::felt()),
            "catppuccin-mocha" | "catppuccin_mocha" | "catppuccin" => Some(Self::catppuccin_mocha()),
            "nord" => Some(Self::nord()),
            "gruvbox" | "gruvbox-dark" | "gruvbox_dark" => Some(Self::gruvbox()),
            _ => None,
        }
    }

    /// Text colour for a card label
    pub fn card_color(&self, label: &str) -> Color {
        match CardColor::of(label) {
            CardColor::Red => self.red_suit,
            CardColor::Black => self.black_suit,
        }
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, #rrggbbaa (alpha ignored), with or without `#`
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        s.get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .ok_or(ColorError::InvalidHex)
    };

    match s.len() {
        // #rgb -> #rrggbb
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 | 8 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

//! Card tile widget
//!
//! Renders one card as a small tile:
//! - Markers (edit selection on the left, drawn on the right)
//! - Label, centred by display width and coloured by suit
//! - 1-based position (dimmed), used when naming cards in prompts

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;

/// Height of a tile in lines
pub const TILE_HEIGHT: u16 = 3;

/// Card tile widget
pub struct CardTile<'a> {
    label: &'a str,
    position: usize,
    theme: &'a Theme,
    drawn: bool,
    current: bool,
    cursor: bool,
    selected: bool,
    drawn_marker: &'a str,
    selected_marker: &'a str,
}

impl<'a> CardTile<'a> {
    pub fn new(label: &'a str, position: usize, theme: &'a Theme) -> Self {
        Self {
            label,
            position,
            theme,
            drawn: false,
            current: false,
            cursor: false,
            selected: false,
            drawn_marker: "✓",
            selected_marker: "●",
        }
    }

    pub fn drawn(mut self, drawn: bool) -> Self {
        self.drawn = drawn;
        self
    }

    pub fn current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }

    pub fn cursor(mut self, cursor: bool) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn markers(mut self, drawn: &'a str, selected: &'a str) -> Self {
        self.drawn_marker = drawn;
        self.selected_marker = selected;
        self
    }
}

impl<'a> Widget for CardTile<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let bg = if self.cursor {
            self.theme.cursor_bg
        } else {
            self.theme.background
        };
        buf.set_style(area, Style::default().bg(bg));

        let padding_x = 1u16;
        let inner_width = area.width.saturating_sub(padding_x * 2);
        if inner_width == 0 {
            return;
        }
        let inner_x = area.x + padding_x;
        let max_y = area.y + area.height;

        // Line 1: markers
        if self.selected {
            let style = Style::default().fg(self.theme.selection).bg(bg);
            buf.set_string(inner_x, area.y, self.selected_marker, style);
        }
        if self.drawn {
            let marker_x = inner_x + inner_width.saturating_sub(self.drawn_marker.width() as u16);
            let style = Style::default().fg(self.theme.dimmed).bg(bg);
            buf.set_string(marker_x, area.y, self.drawn_marker, style);
        }

        // Line 2: label
        let label_y = area.y + 1;
        if label_y < max_y {
            let mut style = if self.drawn {
                Style::default()
                    .fg(self.theme.dimmed_alt)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(self.theme.card_color(self.label))
            };
            if self.current {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }

            let text = truncate(self.label, inner_width as usize);
            let offset = (inner_width as usize).saturating_sub(text.width()) / 2;
            buf.set_string(inner_x + offset as u16, label_y, text, style.bg(bg));
        }

        // Line 3: position
        let pos_y = area.y + 2;
        if pos_y < max_y {
            let pos = self.position.to_string();
            let pos_x = inner_x + inner_width.saturating_sub(pos.width() as u16);
            let style = Style::default().fg(self.theme.dimmed_alt).bg(bg);
            buf.set_string(pos_x, pos_y, pos, style);
        }
    }
}

/// Truncate string to fit within max_width, adding ellipsis if needed
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width + 1 > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

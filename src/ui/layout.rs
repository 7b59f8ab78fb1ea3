//! Responsive grid layout for card tiles
//!
//! Provides:
//! - Column count recomputed from the available width
//! - Row-major ordering (cards read left to right, like a hand of cards)
//! - Cursor navigation helpers (up/down/left/right/home/end)
//! - Row scrolling that keeps the cursor visible

use std::ops::Range;

/// Horizontal gap between tiles
pub const COLUMN_GAP: u16 = 1;

/// Grid layout for a given area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of columns
    pub columns: u16,
    /// Number of fully visible rows
    pub visible_rows: u16,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 13,
            visible_rows: 4,
        }
    }
}

impl GridLayout {
    /// Create a new grid layout
    pub fn new(columns: u16, visible_rows: u16) -> Self {
        Self {
            columns: columns.max(1),
            visible_rows: visible_rows.max(1),
        }
    }

    /// As many tiles per row as fit in `width`, as many rows as fit in `height`
    pub fn fit(width: u16, height: u16, tile_width: u16, tile_height: u16) -> Self {
        let tile_width = tile_width.max(1);
        let columns = width.saturating_add(COLUMN_GAP) / tile_width.saturating_add(COLUMN_GAP);
        let rows = height / tile_height.max(1);
        Self::new(columns, rows)
    }

    /// Total rows needed for `total` cards
    pub fn row_count(&self, total: usize) -> usize {
        total.div_ceil(self.columns as usize)
    }

    /// Convert flat index to (row, col) position
    /// Uses row-major ordering:
    /// ```text
    /// Index:  0 1 2
    ///         3 4 5
    ///         6 7
    /// ```
    pub fn index_to_position(&self, index: usize) -> (usize, usize) {
        let cols = self.columns as usize;
        (index / cols, index % cols)
    }

    /// Calculate new cursor after moving up one row
    pub fn move_up(&self, current: usize) -> usize {
        let cols = self.columns as usize;
        if current >= cols {
            current - cols
        } else {
            current
        }
    }

    /// Calculate new cursor after moving down one row
    pub fn move_down(&self, current: usize, total: usize) -> usize {
        let cols = self.columns as usize;
        if current + cols < total {
            current + cols
        } else {
            current
        }
    }

    /// Calculate new cursor after moving left
    pub fn move_left(&self, current: usize) -> usize {
        current.saturating_sub(1)
    }

    /// Calculate new cursor after moving right
    pub fn move_right(&self, current: usize, total: usize) -> usize {
        if current + 1 < total {
            current + 1
        } else {
            current
        }
    }

    /// Move to first card
    pub fn move_home(&self) -> usize {
        0
    }

    /// Move to last card
    pub fn move_end(&self, total: usize) -> usize {
        total.saturating_sub(1)
    }

    /// First visible row after adjusting `scroll` so the cursor's row is on screen
    pub fn scroll_to(&self, cursor: usize, scroll: usize) -> usize {
        let (row, _) = self.index_to_position(cursor);
        let rows = self.visible_rows as usize;
        if row < scroll {
            row
        } else if row >= scroll + rows {
            row + 1 - rows
        } else {
            scroll
        }
    }

    /// Range of card indices visible when the first visible row is `scroll`
    pub fn visible_range(&self, scroll: usize, total: usize) -> Range<usize> {
        let cols = self.columns as usize;
        let start = (scroll * cols).min(total);
        let end = (start + cols * self.visible_rows as usize).min(total);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit() {
        // 8-wide tiles with 1 gap: 13 tiles need 13*8 + 12 = 116 columns
        assert_eq!(GridLayout::fit(116, 12, 8, 3), GridLayout::new(13, 4));
        assert_eq!(GridLayout::fit(115, 12, 8, 3).columns, 12);
        // Always at least one column and row
        assert_eq!(GridLayout::fit(3, 1, 8, 3), GridLayout::new(1, 1));
    }

    #[test]
    fn test_positions() {
        let layout = GridLayout::new(3, 2);
        assert_eq!(layout.index_to_position(0), (0, 0));
        assert_eq!(layout.index_to_position(4), (1, 1));
        assert_eq!(layout.row_count(7), 3);
        assert_eq!(layout.row_count(0), 0);
    }

    #[test]
    fn test_navigation() {
        let layout = GridLayout::new(3, 2);
        let total = 8;

        assert_eq!(layout.move_up(4), 1);
        assert_eq!(layout.move_up(1), 1);
        assert_eq!(layout.move_down(4, total), 7);
        assert_eq!(layout.move_down(5, total), 5); // no card below
        assert_eq!(layout.move_left(0), 0);
        assert_eq!(layout.move_right(7, total), 7);
        assert_eq!(layout.move_end(total), 7);
        assert_eq!(layout.move_end(0), 0);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let layout = GridLayout::new(3, 2);

        assert_eq!(layout.scroll_to(0, 0), 0);
        assert_eq!(layout.scroll_to(5, 0), 0);
        // Row 2 is below the window of rows 0..2
        assert_eq!(layout.scroll_to(6, 0), 1);
        // Row 0 is above the window starting at row 2
        assert_eq!(layout.scroll_to(1, 2), 0);
    }

    #[test]
    fn test_visible_range() {
        let layout = GridLayout::new(3, 2);
        assert_eq!(layout.visible_range(0, 8), 0..6);
        assert_eq!(layout.visible_range(1, 8), 3..8);
        assert_eq!(layout.visible_range(5, 8), 8..8);
        assert_eq!(layout.visible_range(0, 0), 0..0);
    }
}

//! Drawing functions for the TUI
//!
//! This module contains all rendering logic:
//! - `board` - Group toolbar, card grid, current card, status bar
//! - `dialog` - Prompt and confirmation overlays

mod board;
mod dialog;

use ratatui::Frame;

use crate::app::{App, AppMode};

use board::draw_board;
use dialog::{draw_confirm, draw_prompt};

/// Main draw function
pub fn draw(f: &mut Frame, app: &mut App) {
    // Clone so the board can update the viewport on `app`
    let theme = app.theme().clone();
    draw_board(f, app, &theme);

    match app.mode() {
        AppMode::Board | AppMode::Exit => {}
        AppMode::Prompt { kind, input } => draw_prompt(f, kind.title(), input, &theme),
        AppMode::Confirm { question, .. } => draw_confirm(f, question, &theme),
    }
}

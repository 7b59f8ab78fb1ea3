//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Main draw functions (board, dialogs)
//! - `theme.rs` - Color themes and presets
//! - `layout.rs` - Responsive grid layout
//! - `card_tile.rs` - Card tile widget

mod draw;
pub mod card_tile;
pub mod layout;
pub mod theme;

// Re-export main draw function
pub use draw::draw;

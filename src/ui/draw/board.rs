//! Board drawing functions
//!
//! This module handles rendering the main card board:
//! - Group toolbar (tabs)
//! - Edit toolbar
//! - Card grid with responsive columns
//! - Current card panel
//! - Status bar

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, StatusLevel};
use crate::ui::card_tile::{CardTile, TILE_HEIGHT};
use crate::ui::layout::{GridLayout, COLUMN_GAP};
use crate::ui::theme::Theme;

const BROWSE_HINTS: &str =
    " d: draw | Space: toggle | r: reset | [ ]: group | a/x: add/delete group | o/s: load/export | e: edit | q: quit ";

/// Draw the board: every mode renders this underneath its overlays
pub(crate) fn draw_board(f: &mut Frame, app: &mut App, theme: &Theme) {
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let editing = app.store().is_editing();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Group toolbar
            Constraint::Length(u16::from(editing)),       // Edit toolbar
            Constraint::Min(TILE_HEIGHT + 2),             // Card grid
            Constraint::Length(3),                        // Current card
            Constraint::Length(1),                        // Status bar
        ])
        .split(area);

    draw_group_toolbar(f, app, chunks[0], theme);
    if editing {
        draw_edit_toolbar(f, app, chunks[1], theme);
    }
    draw_card_grid(f, app, chunks[2], theme);
    draw_current_card(f, app, chunks[3], theme);
    draw_status_bar(f, app, chunks[4], theme);
}

/// Draw the group tabs
fn draw_group_toolbar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let store = app.store();
    let titles: Vec<String> = store
        .groups()
        .iter()
        .enumerate()
        .map(|(i, g)| format!("{} {}", i + 1, g.display_name()))
        .collect();

    let count = format!(" {} cards ", store.active_group().len());
    let tabs = Tabs::new(titles)
        .select(store.active_index())
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(app.config().appearance.title.as_str())
                .title_top(Line::from(count).right_aligned())
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(tabs, area);
}

/// Draw the edit toolbar, shown only while editing
fn draw_edit_toolbar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let store = app.store();
    let selected = store.selection().len();
    let mut spans = vec![
        Span::styled(
            " EDITING ",
            Style::default()
                .fg(theme.background)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" n: add | r: rename | x: delete | Space: select | "),
        Span::styled(
            format!("X: delete selected ({selected})"),
            Style::default().fg(if selected > 0 {
                theme.selection
            } else {
                theme.dimmed
            }),
        ),
    ];
    if store.active_group().is_default() {
        spans.push(Span::raw(" | D: restore default"));
    }
    spans.push(Span::raw(" | e/Esc: save"));

    let toolbar = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.dimmed).bg(theme.background));
    f.render_widget(toolbar, area);
}

/// Draw the card grid, recomputing columns for the current width
fn draw_card_grid(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let hints = if app.store().is_editing() {
        ""
    } else {
        BROWSE_HINTS
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .title(format!(" {} ", app.store().active_group().name))
        .title_bottom(Line::from(hints).right_aligned())
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let tile_width = app.config().appearance.tile_width.max(3);
    let grid = GridLayout::fit(inner.width, inner.height, tile_width, TILE_HEIGHT);
    app.update_viewport(grid);
    let app: &App = app;

    let store = app.store();
    let group = store.active_group();
    if group.is_empty() {
        let text = if store.is_editing() {
            "No cards. Press n to add one."
        } else {
            "This group is empty. Press e to edit it."
        };
        let empty = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.dimmed).bg(theme.background));
        f.render_widget(empty, inner);
        return;
    }

    let appearance = &app.config().appearance;
    let scroll = app.scroll();
    for index in grid.visible_range(scroll, group.len()) {
        let (row, col) = grid.index_to_position(index);
        let x = inner.x + col as u16 * (tile_width + COLUMN_GAP);
        let y = inner.y + (row - scroll) as u16 * TILE_HEIGHT;

        // Skip tiles that would overflow the grid area
        if y + TILE_HEIGHT > inner.bottom() || x >= inner.right() {
            continue;
        }
        let tile_area = Rect::new(x, y, tile_width.min(inner.right() - x), TILE_HEIGHT);

        let tile = CardTile::new(&group.cards[index], index + 1, theme)
            .drawn(store.is_drawn(index))
            .current(store.current_index() == Some(index))
            .cursor(app.cursor() == index)
            .selected(store.is_selected(index))
            .markers(&appearance.drawn_marker, &appearance.selected_marker);
        f.render_widget(tile, tile_area);
    }
}

/// Draw the most recent card and pool counters
fn draw_current_card(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let store = app.store();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dimmed_alt))
        .title(" Current card ")
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let current = match store.current_card() {
        Some(card) => Line::from(vec![
            Span::raw(" "),
            Span::styled(
                card,
                Style::default()
                    .fg(theme.card_color(card))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None if store.is_editing() => Line::from(Span::styled(
            " Drawing is paused while editing",
            Style::default().fg(theme.dimmed),
        )),
        None => Line::from(Span::styled(
            " Waiting for a draw...",
            Style::default().fg(theme.dimmed),
        )),
    };

    let total = store.active_group().len();
    let counts = if store.is_exhausted() && total > 0 {
        Line::from(Span::styled(
            format!("All {total} cards drawn | r: reset "),
            Style::default().fg(theme.warning),
        ))
    } else {
        Line::from(Span::styled(
            format!(
                "Drawn {}/{} | {} left ",
                store.drawn().len(),
                total,
                store.remaining()
            ),
            Style::default().fg(theme.dimmed),
        ))
    };

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);
    f.render_widget(Paragraph::new(current), halves[0]);
    f.render_widget(Paragraph::new(counts).alignment(Alignment::Right), halves[1]);
}

/// Draw the status bar
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let (text, color) = match app.status() {
        Some(status) => {
            let color = match status.level {
                StatusLevel::Info => theme.success,
                StatusLevel::Warning => theme.warning,
            };
            (format!(" {}", status.text), color)
        }
        None => (String::new(), theme.dimmed),
    };

    let status_bar =
        Paragraph::new(text).style(Style::default().fg(color).bg(theme.background));
    f.render_widget(status_bar, area);
}

//! Modal dialogs drawn over the board

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Theme;

/// Dialog width in columns, before clamping to the screen
const DIALOG_WIDTH: u16 = 60;

/// Rectangle of `width` x `height` centred in `area`, clamped to fit
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn dialog_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(title)
        .style(Style::default().bg(theme.background))
}

/// Draw a single-line text input
pub(crate) fn draw_prompt(f: &mut Frame, title: &str, input: &str, theme: &Theme) {
    let area = centered_rect(DIALOG_WIDTH, 5, f.area());
    f.render_widget(Clear, area);

    let block = dialog_block(title, theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Keep the end of long input visible
    let max_width = inner.width.saturating_sub(2) as usize;
    let mut visible = input;
    while visible.width() > max_width {
        let mut chars = visible.chars();
        chars.next();
        visible = chars.as_str();
    }

    let lines = vec![
        Line::from(vec![
            Span::styled("❯ ", Style::default().fg(theme.accent)),
            Span::styled(visible, Style::default().fg(theme.foreground)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: confirm | Esc: cancel",
            Style::default().fg(theme.dimmed),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);

    let cursor_x = inner.x + 2 + visible.width() as u16;
    f.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
}

/// Draw a yes/no question
pub(crate) fn draw_confirm(f: &mut Frame, question: &str, theme: &Theme) {
    let area = centered_rect(DIALOG_WIDTH, 6, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            question,
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y/Enter: yes | n/Esc: no",
            Style::default().fg(theme.dimmed),
        )),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(dialog_block(" Confirm ", theme));
    f.render_widget(dialog, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(60, 5, area), Rect::new(20, 17, 60, 5));

        // Clamped on small screens
        let small = Rect::new(0, 0, 30, 3);
        assert_eq!(centered_rect(60, 5, small), Rect::new(0, 0, 30, 3));
    }
}

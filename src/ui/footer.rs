//! Bottom hint bar.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};

const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

const HINTS: [(&str, &str); 6] = [
    ("Space", "Count"),
    ("c", "Clear"),
    ("d", "Disable/Able"),
    ("←/→", "Year"),
    ("r", "Reload"),
    ("q", "Quit"),
];

/// Key hints on the left, version right-aligned.
pub struct Footer;

impl Footer {
    pub fn widget(width: u16) -> Paragraph<'static> {
        let key_style = Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD);
        let action_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = Vec::new();
        let mut used = 0;
        for (index, (key, action)) in HINTS.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw("  "));
                used += 2;
            }
            spans.push(Span::styled(format!(" {key} "), key_style));
            spans.push(Span::styled(format!(" {action}"), action_style));
            used += key.chars().count() + 3 + action.chars().count();
        }

        let padding = usize::from(width).saturating_sub(used + VERSION.chars().count() + 1);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(VERSION, action_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

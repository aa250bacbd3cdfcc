//! Top status bar.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::chart::ChartPhase;
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
};

/// One-line header: fetch status dot, app name, country, and year range.
pub struct Header<'a> {
    country: &'a str,
    date_range: String,
    phase: &'a ChartPhase,
}

impl<'a> Header<'a> {
    pub fn new(country: &'a str, start_year: u16, end_year: u16, phase: &'a ChartPhase) -> Self {
        Self {
            country,
            date_range: format!("{start_year}:{end_year}"),
            phase,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let dot_style = match self.phase {
            ChartPhase::Loading => Style::default().fg(STATUS_WARN),
            ChartPhase::Failed { .. } => Style::default().fg(STATUS_ERROR),
            ChartPhase::Loaded { .. } => Style::default().fg(STATUS_OK),
        };
        let separator = Span::styled(" │ ", Style::default().fg(HEADER_SEPARATOR));

        let line = Line::from(vec![
            Span::styled(" ● ", dot_style),
            Span::styled(
                "demograph".to_string(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            separator.clone(),
            Span::styled(self.country.to_string(), Style::default().fg(HEADER_TEXT)),
            separator.clone(),
            Span::styled(self.date_range.clone(), Style::default().fg(HEADER_TEXT)),
            separator,
            Span::styled(
                "urban vs rural population".to_string(),
                Style::default().fg(HEADER_SEPARATOR),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

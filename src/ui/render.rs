//! Frame composition: header, counter panel, chart panel, footer.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::chart::{ChartPhase, StackedBarChart};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, RURAL_SERIES, STATUS_ERROR,
    STATUS_WARN, URBAN_SERIES,
};
use crate::worldbank::YearBreakdown;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header_area, counter_area, chart_area, footer_area) = layout_regions(frame.area());

    let source = &app.config().source;
    let header = Header::new(
        &source.country,
        source.start_year,
        source.end_year,
        app.chart(),
    );
    frame.render_widget(header.widget(), header_area);

    render_counter(frame, app, counter_area);
    render_chart(frame, app, chart_area);

    frame.render_widget(Footer::widget(footer_area.width), footer_area);
}

fn render_counter(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let counter = app.counter();
    let key_style = Style::default()
        .fg(HEADER_TEXT)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    let click_style = if counter.disabled {
        Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(HEADER_TEXT)
    };

    let mut click_line = vec![
        Span::styled(" Space ", key_style),
        Span::styled(format!(" CLICK: {}", counter.value), click_style),
    ];
    if counter.disabled {
        click_line.push(Span::styled(
            "  (disabled)",
            Style::default().fg(STATUS_WARN),
        ));
    }

    let toggle_label = if counter.disabled { "ABLE" } else { "DISABLE" };
    let lines = vec![
        Line::from(click_line),
        Line::from(vec![
            Span::styled(" c ", key_style),
            Span::styled(" CLEAR", Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(vec![
            Span::styled(" d ", key_style),
            Span::styled(format!(" {toggle_label}"), Style::default().fg(HEADER_TEXT)),
        ]),
    ];

    let block = Block::default()
        .title(" Counter ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_chart(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let source = &app.config().source;
    let title = format!(
        " {} urban vs rural population, {}:{} (millions) ",
        source.country, source.start_year, source.end_year
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    match app.chart() {
        ChartPhase::Loading => {
            let spinner = SPINNER[(app.tick() as usize) % SPINNER.len()];
            render_placeholder(
                frame,
                inner,
                format!("{spinner} Loading population data..."),
                Style::default().fg(HEADER_SEPARATOR),
            );
        }
        ChartPhase::Failed { message } => {
            render_placeholder(frame, inner, message.clone(), Style::default().fg(STATUS_ERROR));
        }
        ChartPhase::Loaded { points } if points.is_empty() => {
            render_placeholder(
                frame,
                inner,
                "No population data to display.".to_string(),
                Style::default().fg(HEADER_SEPARATOR),
            );
        }
        ChartPhase::Loaded { points } => {
            render_loaded(frame, inner, points, app.year_selection());
        }
    }
}

/// Single message, roughly centered in the panel.
fn render_placeholder(frame: &mut Frame<'_>, area: Rect, text: String, style: Style) {
    let pad = usize::from(area.height.saturating_sub(1) / 2);
    let mut lines = vec![Line::default(); pad];
    lines.push(Line::from(Span::styled(text, style)));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_loaded(frame: &mut Frame<'_>, area: Rect, points: &[YearBreakdown], selected: usize) {
    // Two rows at the bottom: legend plus the selected-year readout.
    let chart_rows = area.height.saturating_sub(2);
    let selected = selected.min(points.len() - 1);
    frame.render_widget(
        StackedBarChart::new(points, selected),
        Rect {
            height: chart_rows,
            ..area
        },
    );

    if area.height < 2 {
        return;
    }
    let legend_y = area.y + chart_rows;
    let legend = Line::from(vec![
        Span::styled(" █ ", Style::default().fg(URBAN_SERIES)),
        Span::styled("Urban   ", Style::default().fg(HEADER_TEXT)),
        Span::styled("█ ", Style::default().fg(RURAL_SERIES)),
        Span::styled("Rural", Style::default().fg(HEADER_TEXT)),
    ]);
    frame.render_widget(
        Paragraph::new(legend),
        Rect {
            y: legend_y,
            height: 1,
            ..area
        },
    );

    let point = &points[selected];
    let readout = Line::from(vec![
        Span::styled(
            format!(" {} ", point.year),
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  urban {:.2} M", point.urban),
            Style::default().fg(URBAN_SERIES),
        ),
        Span::styled(
            format!("  rural {:.2} M", point.rural),
            Style::default().fg(RURAL_SERIES),
        ),
        Span::styled(
            format!("  total {:.2} M", point.total()),
            Style::default().fg(HEADER_TEXT),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(readout),
        Rect {
            y: legend_y + 1,
            height: 1,
            ..area
        },
    );
}

//! Stacked bar chart: one column per year, urban filled from the baseline,
//! rural stacked above it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::ui::theme::{ACTIVE_HIGHLIGHT, AXIS_TEXT, HEADER_TEXT, RURAL_SERIES, URBAN_SERIES};
use crate::worldbank::YearBreakdown;

/// Left gutter reserved for the vertical unit label, tick values, and axis.
const GUTTER_WIDTH: u16 = 9;
/// Widest a single year column may grow.
const MAX_BAR_WIDTH: u16 = 6;
const BAR_GAP: u16 = 1;

pub struct StackedBarChart<'a> {
    points: &'a [YearBreakdown],
    selected: usize,
}

impl<'a> StackedBarChart<'a> {
    pub fn new(points: &'a [YearBreakdown], selected: usize) -> Self {
        Self { points, selected }
    }
}

impl Widget for StackedBarChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.points.is_empty() || area.width <= GUTTER_WIDTH + 1 || area.height < 3 {
            return;
        }

        // Bottom row carries the year labels; everything above is plot.
        let plot_height = area.height - 1;
        let plot = Rect {
            x: area.x + GUTTER_WIDTH,
            y: area.y,
            width: area.width - GUTTER_WIDTH,
            height: plot_height,
        };

        let max_total = self
            .points
            .iter()
            .map(YearBreakdown::total)
            .fold(0.0_f64, f64::max);
        if max_total <= 0.0 {
            return;
        }
        let per_cell = max_total / f64::from(plot_height);

        render_gutter(buf, area, plot_height, max_total);
        render_grid(buf, plot, [plot.y, plot.y + plot_height / 2]);

        let columns = self.points.len() as u16;
        let bar_width = ((plot.width + BAR_GAP) / columns)
            .saturating_sub(BAR_GAP)
            .clamp(1, MAX_BAR_WIDTH);

        for (index, point) in self.points.iter().enumerate() {
            let x0 = plot.x + index as u16 * (bar_width + BAR_GAP);
            if x0 + bar_width > plot.x + plot.width {
                break;
            }

            let urban_cells = cells_for(point.urban, per_cell, plot_height);
            let rural_cells =
                cells_for(point.rural, per_cell, plot_height).min(plot_height - urban_cells);

            for row in 0..urban_cells + rural_cells {
                let y = plot.y + plot_height - 1 - row;
                let style = if row < urban_cells {
                    Style::default().fg(URBAN_SERIES)
                } else {
                    Style::default().fg(RURAL_SERIES)
                };
                for dx in 0..bar_width {
                    if let Some(cell) = buf.cell_mut((x0 + dx, y)) {
                        cell.set_symbol("█");
                        cell.set_style(style);
                    }
                }
            }

            let label = fit_label(&point.year, usize::from(bar_width));
            let label_width = label.chars().count() as u16;
            let label_x = x0 + bar_width.saturating_sub(label_width) / 2;
            let label_style = if index == self.selected {
                Style::default()
                    .fg(HEADER_TEXT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(AXIS_TEXT)
            };
            buf.set_string(label_x, area.y + area.height - 1, &label, label_style);
        }
    }
}

/// Whole cells for one segment. Any positive value paints at least one cell
/// so thin years do not vanish from the chart.
fn cells_for(value: f64, per_cell: f64, plot_height: u16) -> u16 {
    if value <= 0.0 || per_cell <= 0.0 {
        return 0;
    }
    let cells = (value / per_cell).round() as u16;
    cells.clamp(1, plot_height)
}

/// Year label fitted to a column: keeps the trailing characters, so "2014"
/// in a two-cell column shows as "14".
fn fit_label(year: &str, width: usize) -> String {
    let count = year.chars().count();
    if count <= width {
        year.to_string()
    } else {
        year.chars().skip(count - width).collect()
    }
}

fn render_gutter(buf: &mut Buffer, area: Rect, plot_height: u16, max_total: f64) {
    let axis_style = Style::default().fg(AXIS_TEXT);
    let unit_style = axis_style.add_modifier(Modifier::DIM);

    // Unit label written downwards in the first column.
    let unit = "MILLIONS";
    let offset = plot_height.saturating_sub(unit.len() as u16) / 2;
    for (i, ch) in unit.chars().enumerate() {
        let y = area.y + offset + i as u16;
        if y < area.y + plot_height {
            buf.set_string(area.x, y, ch.to_string(), unit_style);
        }
    }

    let ticks = [
        (area.y, max_total),
        (area.y + plot_height / 2, max_total / 2.0),
        (area.y + plot_height - 1, 0.0),
    ];
    for (y, value) in ticks {
        buf.set_string(area.x + 1, y, format!("{value:>6.0}"), axis_style);
    }
    for row in 0..plot_height {
        let y = area.y + row;
        let symbol = if ticks.iter().any(|(tick_y, _)| *tick_y == y) {
            "┤"
        } else {
            "│"
        };
        buf.set_string(area.x + GUTTER_WIDTH - 1, y, symbol, axis_style);
    }
}

/// Faint horizontal rules at the tick rows. Bars paint over them.
fn render_grid(buf: &mut Buffer, plot: Rect, rows: [u16; 2]) {
    let style = Style::default().fg(AXIS_TEXT).add_modifier(Modifier::DIM);
    for y in rows {
        for x in plot.x..plot.x + plot.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol("╌");
                cell.set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(year: &str, urban: f64, rural: f64) -> YearBreakdown {
        YearBreakdown {
            year: year.to_string(),
            urban,
            rural,
        }
    }

    // -- geometry helpers ---------------------------------------------------

    #[test]
    fn cells_for_rounds_to_whole_cells() {
        assert_eq!(cells_for(50.0, 10.0, 10), 5);
        assert_eq!(cells_for(54.0, 10.0, 10), 5);
        assert_eq!(cells_for(56.0, 10.0, 10), 6);
    }

    #[test]
    fn cells_for_keeps_thin_positive_values_visible() {
        assert_eq!(cells_for(0.4, 10.0, 10), 1);
        assert_eq!(cells_for(0.0, 10.0, 10), 0);
    }

    #[test]
    fn cells_for_clamps_to_the_plot_height() {
        assert_eq!(cells_for(500.0, 10.0, 10), 10);
    }

    #[test]
    fn fit_label_keeps_trailing_digits() {
        assert_eq!(fit_label("2014", 6), "2014");
        assert_eq!(fit_label("2014", 4), "2014");
        assert_eq!(fit_label("2014", 2), "14");
    }

    // -- rendering ----------------------------------------------------------

    #[test]
    fn renders_urban_below_rural() {
        let area = Rect::new(0, 0, 30, 11);
        let mut buf = Buffer::empty(area);
        let points = vec![point("2020", 50.0, 50.0)];
        StackedBarChart::new(&points, 0).render(area, &mut buf);

        // Plot gets rows 0..10, bars start at x = 9. Bottom of the stack is
        // urban, top is rural.
        let bottom = buf.cell((9u16, 9u16)).expect("bottom cell");
        assert_eq!(bottom.symbol(), "█");
        assert_eq!(bottom.style().fg, Some(URBAN_SERIES));

        let top = buf.cell((9u16, 0u16)).expect("top cell");
        assert_eq!(top.symbol(), "█");
        assert_eq!(top.style().fg, Some(RURAL_SERIES));
    }

    #[test]
    fn renders_the_year_label_under_the_column() {
        let area = Rect::new(0, 0, 30, 11);
        let mut buf = Buffer::empty(area);
        let points = vec![point("2020", 50.0, 50.0)];
        StackedBarChart::new(&points, 0).render(area, &mut buf);

        let label: String = (10u16..14)
            .map(|x| buf.cell((x, 10u16)).expect("label cell").symbol().to_string())
            .collect();
        assert_eq!(label, "2020");
    }

    #[test]
    fn renders_axis_ticks_in_the_gutter() {
        let area = Rect::new(0, 0, 30, 11);
        let mut buf = Buffer::empty(area);
        let points = vec![point("2020", 50.0, 50.0)];
        StackedBarChart::new(&points, 0).render(area, &mut buf);

        assert_eq!(buf.cell((8u16, 0u16)).expect("top tick").symbol(), "┤");
        assert_eq!(buf.cell((8u16, 9u16)).expect("base tick").symbol(), "┤");
        assert_eq!(buf.cell((8u16, 3u16)).expect("axis line").symbol(), "│");
    }

    #[test]
    fn empty_points_render_nothing() {
        let area = Rect::new(0, 0, 30, 11);
        let mut buf = Buffer::empty(area);
        StackedBarChart::new(&[], 0).render(area, &mut buf);
        assert_eq!(buf.cell((9u16, 9u16)).expect("cell").symbol(), " ");
    }
}

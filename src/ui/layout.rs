//! Screen partitioning.

use ratatui::layout::Rect;

/// Fixed vertical regions: header, counter panel, chart panel, footer.
///
/// Header and footer keep their heights; the counter takes five rows when
/// they fit; the chart gets everything left over. On a tiny terminal the
/// regions collapse from the bottom up rather than overlap.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let counter_height = 5.min(
        area.height
            .saturating_sub(header_height + footer_height),
    );
    let chart_height = area
        .height
        .saturating_sub(header_height + counter_height + footer_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let counter = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: counter_height,
    };
    let chart = Rect {
        x: area.x,
        y: area.y + header_height + counter_height,
        width: area.width,
        height: chart_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + header_height + counter_height + chart_height,
        width: area.width,
        height: footer_height,
    };
    (header, counter, chart, footer)
}

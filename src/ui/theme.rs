//! Color palette shared across the UI.

use ratatui::style::Color;

pub const URBAN_SERIES: Color = Color::Rgb(0x88, 0x84, 0xd8);
pub const RURAL_SERIES: Color = Color::Rgb(0x82, 0xca, 0x9d);

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const AXIS_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);

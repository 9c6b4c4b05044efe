//! Styling helpers layered onto widget fragments.
//!
//! Widgets name colors in configuration as plain strings; unknown names
//! leave the text unstyled rather than failing the render.

use colored::{Color, Colorize};

/// Map a configuration color name to a terminal color.
pub fn color_by_name(name: &str) -> Option<Color> {
    match name {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::BrightBlack),
        _ => None,
    }
}

/// Wrap `text` in the named color, or return it unchanged when the name
/// is missing or unrecognized.
pub fn paint(text: &str, name: Option<&str>) -> String {
    match name.and_then(color_by_name) {
        Some(color) => text.color(color).to_string(),
        None => text.to_string(),
    }
}

/// Threshold step function shared by percentage-driven widgets.
///
/// Below `medium` is green, at or above `medium` but below `high` is
/// yellow, at or above `high` is red. The context bar uses 70/90, the
/// rate-limits widget 60/80.
pub fn tier_color(pct: u32, medium: u32, high: u32) -> Color {
    if pct >= high {
        Color::Red
    } else if pct >= medium {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Lane colours cycle through this palette in the timeline view.
pub const LANE_PALETTE: [&str; 4] = [BLUE, GREEN, MAGENTA, CYAN];

/// Coverage color:
/// \>= 70% → green
/// \>= 40% → yellow
/// otherwise → red
pub fn color_for_coverage(percentage: f64) -> &'static str {
    if percentage >= 70.0 {
        GREEN
    } else if percentage >= 40.0 {
        YELLOW
    } else {
        RED
    }
}

pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Parse a `#RRGGBB` label colour into an RGB triple.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let h = hex.trim().strip_prefix('#')?;
    if h.len() != 6 || !h.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some((r, g, b))
}

/// A coloured "●" swatch for a label colour (plain dot when unparsable).
pub fn swatch(hex: &str) -> String {
    match parse_hex_color(hex) {
        Some((r, g, b)) => ansi_term::Colour::RGB(r, g, b).paint("●").to_string(),
        None => "●".to_string(),
    }
}

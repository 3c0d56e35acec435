use eframe::egui::Color32;
use palette::{named, Srgb};

// ---------------------------------------------------------------------------
// Named colours used by the charts
// ---------------------------------------------------------------------------

fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}

pub fn blue() -> Color32 {
    to_color32(named::BLUE)
}

pub fn red() -> Color32 {
    to_color32(named::RED)
}

/// Web "green" (#008000), not full-intensity lime.
pub fn green() -> Color32 {
    to_color32(named::GREEN)
}

pub fn black() -> Color32 {
    to_color32(named::BLACK)
}

pub fn grey() -> Color32 {
    to_color32(named::GREY)
}

pub fn magenta() -> Color32 {
    to_color32(named::MAGENTA)
}

pub fn dark_orange() -> Color32 {
    to_color32(named::DARKORANGE)
}

/// Swap pure black for white so black series stay visible on a dark theme.
pub fn for_theme(c: Color32, dark_mode: bool) -> Color32 {
    if dark_mode && c == Color32::BLACK {
        Color32::WHITE
    } else {
        c
    }
}

#![forbid(unsafe_code)]

//! Black-or-white text selection.
//!
//! A coarse midpoint rule: it picks between two fixed candidates by background
//! luminance alone and does not consult contrast ratios.

use lumen_color::{Rgb, relative_luminance};

/// Backgrounds at or below this luminance get white text.
pub const TEXT_LUMINANCE_MIDPOINT: f64 = 0.5;

/// White text on dark backgrounds, black text on light ones.
#[must_use]
pub fn pick_text_color(bg: Rgb) -> Rgb {
    if relative_luminance(bg) <= TEXT_LUMINANCE_MIDPOINT {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}

#![forbid(unsafe_code)]

//! WCAG 2.x relative luminance.

use crate::rgb::Rgb;

/// Normalized sRGB value at or below which the transfer curve is linear.
pub const SRGB_LINEAR_THRESHOLD: f64 = 0.03928;
/// Slope of the linear segment.
pub const SRGB_LINEAR_DIVISOR: f64 = 12.92;
/// Offset of the power segment.
pub const SRGB_GAMMA_OFFSET: f64 = 0.055;
/// Scale of the power segment (`1 + offset`).
pub const SRGB_GAMMA_SCALE: f64 = 1.055;
/// Exponent of the power segment.
pub const SRGB_GAMMA: f64 = 2.4;

/// Perceptual weight of the red channel.
pub const RED_WEIGHT: f64 = 0.2126;
/// Perceptual weight of the green channel.
pub const GREEN_WEIGHT: f64 = 0.7152;
/// Perceptual weight of the blue channel.
pub const BLUE_WEIGHT: f64 = 0.0722;

/// Convert a normalized sRGB channel (`0.0..=1.0`) to linear light.
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= SRGB_LINEAR_THRESHOLD {
        c / SRGB_LINEAR_DIVISOR
    } else {
        ((c + SRGB_GAMMA_OFFSET) / SRGB_GAMMA_SCALE).powf(SRGB_GAMMA)
    }
}

fn channel_to_linear(c: u8) -> f64 {
    srgb_to_linear(f64::from(c) / 255.0)
}

/// Relative luminance of `color`, in `[0, 1]`.
///
/// Non-decreasing in each channel with the others held fixed.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = channel_to_linear(color.r);
    let g = channel_to_linear(color.g);
    let b = channel_to_linear(color.b);
    RED_WEIGHT * r + GREEN_WEIGHT * g + BLUE_WEIGHT * b
}

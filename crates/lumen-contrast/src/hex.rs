#![forbid(unsafe_code)]

//! String-facing entry points.
//!
//! Thin wrappers that decode `#RGB` / `#RRGGBB` inputs, delegate to the typed
//! API, and encode results as `#rrggbb`. Malformed input surfaces as
//! [`ColorError::InvalidFormat`], except in [`pick_text_color`], which falls back
//! to black so a renderer always gets a usable answer.

use lumen_color::{ColorError, decode, encode};

use crate::adjust::{self, AdjustOptions, Adjustment};
use crate::evaluate::{self, ContrastReport, WcagLevel};
use crate::text;

/// Contrast ratio between two hex colors.
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64, ColorError> {
    Ok(evaluate::contrast_ratio(decode(a)?, decode(b)?))
}

/// Whether two hex colors reach `level` for the given text size.
pub fn meets_level(
    a: &str,
    b: &str,
    level: WcagLevel,
    is_large_text: bool,
) -> Result<bool, ColorError> {
    Ok(evaluate::meets_level(
        decode(a)?,
        decode(b)?,
        level,
        is_large_text,
    ))
}

/// AA check for two hex colors.
pub fn meets_wcag_aa(a: &str, b: &str, is_large_text: bool) -> Result<bool, ColorError> {
    meets_level(a, b, WcagLevel::Aa, is_large_text)
}

/// AAA check for two hex colors.
pub fn meets_wcag_aaa(a: &str, b: &str, is_large_text: bool) -> Result<bool, ColorError> {
    meets_level(a, b, WcagLevel::Aaa, is_large_text)
}

/// Full report for two hex colors.
pub fn report(a: &str, b: &str) -> Result<ContrastReport, ColorError> {
    Ok(ContrastReport::new(decode(a)?, decode(b)?))
}

/// Adjust a hex foreground against a hex background, best effort.
///
/// Returns the canonical encoding of the result; an already compliant input
/// comes back unchanged (modulo canonicalization).
pub fn adjust_for_contrast(
    foreground: &str,
    background: &str,
    target_ratio: f64,
) -> Result<String, ColorError> {
    let fg = decode(foreground)?;
    let bg = decode(background)?;
    Ok(encode(adjust::adjust_for_contrast(fg, bg, target_ratio)))
}

/// [`adjust_for_contrast`] with the full search outcome.
pub fn adjust_with(
    foreground: &str,
    background: &str,
    options: &AdjustOptions,
) -> Result<Adjustment, ColorError> {
    Ok(adjust::adjust_with(
        decode(foreground)?,
        decode(background)?,
        options,
    ))
}

/// Text color for a hex background: `#ffffff` or `#000000`.
///
/// Never fails; an undecodable background yields `#000000`.
#[must_use]
pub fn pick_text_color(background: &str) -> String {
    match decode(background) {
        Ok(bg) => encode(text::pick_text_color(bg)),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "invalid background, defaulting to black text");
            encode(lumen_color::Rgb::BLACK)
        }
    }
}

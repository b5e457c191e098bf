#![forbid(unsafe_code)]

//! Hex string ⇄ [`Rgb`] codec.
//!
//! Accepted input: `#RGB` or `#RRGGBB`, any case, `#` optional. Output is
//! always the canonical `#rrggbb` form.

use crate::error::{ColorError, FormatIssue};
use crate::rgb::Rgb;

/// Decode a hex color string.
///
/// A short-form digit `d` expands to `d * 17` (`0xd` → `0xdd`). Surrounding
/// whitespace is not trimmed.
///
/// # Errors
///
/// [`ColorError::InvalidFormat`] when the digit count is not 3 or 6, or any
/// character is not a hex digit.
pub fn decode(input: &str) -> Result<Rgb, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);

    let mut nibbles = [0u8; 6];
    let mut len = 0usize;
    for (index, found) in digits.char_indices() {
        let Some(value) = found.to_digit(16) else {
            return Err(ColorError::invalid_format(
                input,
                FormatIssue::NonHexDigit { index, found },
            ));
        };
        if let Some(slot) = nibbles.get_mut(len) {
            *slot = value as u8;
        }
        len += 1;
    }

    match len {
        3 => Ok(Rgb::new(nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17)),
        6 => Ok(Rgb::new(
            nibbles[0] << 4 | nibbles[1],
            nibbles[2] << 4 | nibbles[3],
            nibbles[4] << 4 | nibbles[5],
        )),
        n => Err(ColorError::invalid_format(input, FormatIssue::Length(n))),
    }
}

/// Encode a color as canonical `#rrggbb`.
#[must_use]
pub fn encode(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

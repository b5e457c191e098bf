#![forbid(unsafe_code)]

//! The sRGB channel triple.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// RGB color (opaque, sRGB).
///
/// Each channel is a `u8`, so the `[0, 255]` range holds by construction.
/// Arithmetic that can leave the range goes through [`Rgb::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white, `#ffffff`.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a gray with all three channels set to `v`.
    #[must_use]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Build a color from wide integer channels, clamping each to `[0, 255]`.
    #[must_use]
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        let clamp = |c: i32| c.clamp(0, 255) as u8;
        Self::new(clamp(r), clamp(g), clamp(b))
    }

    /// Shift every channel by `delta`, saturating at the channel bounds.
    ///
    /// A channel already at 0 or 255 stays there.
    #[must_use]
    pub fn shifted(self, delta: i32) -> Self {
        Self::clamped(
            i32::from(self.r) + delta,
            i32::from(self.g) + delta,
            i32::from(self.b) + delta,
        )
    }

    /// Channels as an array, red first.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// WCAG relative luminance in `[0, 1]`.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        crate::luminance::relative_luminance(self)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::hex::decode(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::hex::encode(*self))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&crate::hex::encode(*self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        crate::hex::decode(&text).map_err(serde::de::Error::custom)
    }
}

#![forbid(unsafe_code)]

//! Contrast ratios and WCAG 2.x compliance levels.

use lumen_color::{Rgb, relative_luminance};

/// Luminance offset applied to both sides of the ratio (models ambient flare).
pub const FLARE_OFFSET: f64 = 0.05;

/// AA threshold for normal-size text.
pub const WCAG_AA_NORMAL: f64 = 4.5;
/// AA threshold for large text.
pub const WCAG_AA_LARGE: f64 = 3.0;
/// AAA threshold for normal-size text.
pub const WCAG_AAA_NORMAL: f64 = 7.0;
/// AAA threshold for large text.
pub const WCAG_AAA_LARGE: f64 = 4.5;

/// WCAG conformance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WcagLevel {
    /// Level AA (minimum).
    #[default]
    Aa,
    /// Level AAA (enhanced).
    Aaa,
}

impl WcagLevel {
    /// Minimum contrast ratio for this level.
    #[must_use]
    pub const fn threshold(self, is_large_text: bool) -> f64 {
        match (self, is_large_text) {
            (Self::Aa, false) => WCAG_AA_NORMAL,
            (Self::Aa, true) => WCAG_AA_LARGE,
            (Self::Aaa, false) => WCAG_AAA_NORMAL,
            (Self::Aaa, true) => WCAG_AAA_LARGE,
        }
    }

    /// Get the level name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl std::str::FromStr for WcagLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aa" => Ok(Self::Aa),
            "aaa" => Ok(Self::Aaa),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Contrast ratio between two colors, in `[1, 21]`.
///
/// Argument order does not matter: the lighter luminance is always the
/// numerator.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}

pub(crate) fn ratio_from_luminance(l1: f64, l2: f64) -> f64 {
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + FLARE_OFFSET) / (darker + FLARE_OFFSET)
}

/// Whether the pair reaches `level` for the given text size.
#[must_use]
pub fn meets_level(a: Rgb, b: Rgb, level: WcagLevel, is_large_text: bool) -> bool {
    contrast_ratio(a, b) >= level.threshold(is_large_text)
}

/// Shorthand for [`meets_level`] at AA.
#[must_use]
pub fn meets_wcag_aa(a: Rgb, b: Rgb, is_large_text: bool) -> bool {
    meets_level(a, b, WcagLevel::Aa, is_large_text)
}

/// Shorthand for [`meets_level`] at AAA.
#[must_use]
pub fn meets_wcag_aaa(a: Rgb, b: Rgb, is_large_text: bool) -> bool {
    meets_level(a, b, WcagLevel::Aaa, is_large_text)
}

/// Ratio of a color pair with every level/size verdict precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContrastReport {
    /// Contrast ratio, `[1, 21]`.
    pub ratio: f64,
    /// AA, normal text.
    pub aa: bool,
    /// AA, large text.
    pub aa_large: bool,
    /// AAA, normal text.
    pub aaa: bool,
    /// AAA, large text.
    pub aaa_large: bool,
}

impl ContrastReport {
    /// Evaluate a pair of colors.
    #[must_use]
    pub fn new(a: Rgb, b: Rgb) -> Self {
        Self::from_ratio(contrast_ratio(a, b))
    }

    /// Classify an already computed ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa: ratio >= WcagLevel::Aa.threshold(false),
            aa_large: ratio >= WcagLevel::Aa.threshold(true),
            aaa: ratio >= WcagLevel::Aaa.threshold(false),
            aaa_large: ratio >= WcagLevel::Aaa.threshold(true),
        }
    }

    /// Verdict for one level/size combination.
    #[must_use]
    pub const fn passes(&self, level: WcagLevel, is_large_text: bool) -> bool {
        match (level, is_large_text) {
            (WcagLevel::Aa, false) => self.aa,
            (WcagLevel::Aa, true) => self.aa_large,
            (WcagLevel::Aaa, false) => self.aaa,
            (WcagLevel::Aaa, true) => self.aaa_large,
        }
    }
}

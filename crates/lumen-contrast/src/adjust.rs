#![forbid(unsafe_code)]

//! Contrast-driven foreground adjustment.
//!
//! The search walks a single monotone path: every channel of the foreground
//! moves one unit per step in a direction fixed up front from the background's
//! luminance (lighten on dark backgrounds, darken on light ones). It stops at
//! the first color that reaches the target, or after
//! [`MAX_ADJUST_ITERATIONS`] steps with whatever color it got to. Hue-shifting
//! candidates are never explored.
//!
//! Failing to converge is not an error. Callers that need to know use
//! [`Adjustment::converged`] or re-check the ratio.

use lumen_color::{Rgb, relative_luminance};

use crate::evaluate::{WcagLevel, ratio_from_luminance};

/// Upper bound on adjustment steps.
pub const MAX_ADJUST_ITERATIONS: u32 = 100;

/// Target ratio used when none is given (WCAG AA, normal text).
pub const DEFAULT_TARGET_RATIO: f64 = 4.5;

/// Backgrounds with luminance below this get a lighter foreground.
pub const LIGHTEN_BELOW_LUMINANCE: f64 = 0.5;

/// Which way the foreground moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Increase all channels.
    Lighten,
    /// Decrease all channels.
    Darken,
}

impl Direction {
    /// Direction for a given background.
    #[must_use]
    pub fn for_background(bg: Rgb) -> Self {
        if relative_luminance(bg) < LIGHTEN_BELOW_LUMINANCE {
            Self::Lighten
        } else {
            Self::Darken
        }
    }

    /// Per-step channel delta.
    #[must_use]
    pub const fn step(self) -> i32 {
        match self {
            Self::Lighten => 1,
            Self::Darken => -1,
        }
    }

    /// Get the direction name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lighten => "lighten",
            Self::Darken => "darken",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Search parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustOptions {
    /// Ratio to reach against the background.
    pub target_ratio: f64,
    /// Step budget.
    pub max_iterations: u32,
}

impl Default for AdjustOptions {
    fn default() -> Self {
        Self {
            target_ratio: DEFAULT_TARGET_RATIO,
            max_iterations: MAX_ADJUST_ITERATIONS,
        }
    }
}

impl AdjustOptions {
    /// Options targeting `target_ratio` with the default step budget.
    #[must_use]
    pub fn new(target_ratio: f64) -> Self {
        Self {
            target_ratio,
            ..Self::default()
        }
    }

    /// Options targeting the threshold of `level` for the given text size.
    #[must_use]
    pub fn for_level(level: WcagLevel, is_large_text: bool) -> Self {
        Self::new(level.threshold(is_large_text))
    }

    /// Override the step budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjustment {
    /// Best color reached.
    pub color: Rgb,
    /// Ratio of `color` against the background.
    pub ratio: f64,
    /// Steps taken (0 when the input already met the target).
    pub iterations: u32,
    /// Whether `ratio` reached the target.
    pub converged: bool,
    /// Direction chosen from the background.
    pub direction: Direction,
}

/// Search with the default step budget.
#[must_use]
pub fn adjust(fg: Rgb, bg: Rgb, target_ratio: f64) -> Adjustment {
    adjust_with(fg, bg, &AdjustOptions::new(target_ratio))
}

/// Search with explicit options.
#[must_use]
pub fn adjust_with(fg: Rgb, bg: Rgb, options: &AdjustOptions) -> Adjustment {
    let direction = Direction::for_background(bg);
    let bg_luminance = relative_luminance(bg);
    let target = options.target_ratio;

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "adjust_for_contrast",
        fg = %fg,
        bg = %bg,
        target,
        direction = direction.as_str()
    );
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let mut color = fg;
    let mut ratio = ratio_from_luminance(relative_luminance(color), bg_luminance);
    let mut iterations = 0;
    while ratio < target && iterations < options.max_iterations {
        color = color.shifted(direction.step());
        ratio = ratio_from_luminance(relative_luminance(color), bg_luminance);
        iterations += 1;
    }

    let converged = ratio >= target;
    #[cfg(feature = "tracing")]
    {
        if converged {
            tracing::trace!(result = %color, ratio, iterations, "target reached");
        } else {
            tracing::debug!(
                result = %color,
                ratio,
                iterations,
                "target not reached, returning best effort"
            );
        }
    }

    Adjustment {
        color,
        ratio,
        iterations,
        converged,
        direction,
    }
}

/// Nudge `fg` until it reaches `target_ratio` against `bg`, best effort.
#[must_use]
pub fn adjust_for_contrast(fg: Rgb, bg: Rgb, target_ratio: f64) -> Rgb {
    adjust(fg, bg, target_ratio).color
}

/// Nudge `fg` until the pair passes `level` for the given text size, best effort.
#[must_use]
pub fn adjust_for_level(fg: Rgb, bg: Rgb, level: WcagLevel, is_large_text: bool) -> Rgb {
    adjust_with(fg, bg, &AdjustOptions::for_level(level, is_large_text)).color
}

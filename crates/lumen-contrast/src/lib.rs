#![forbid(unsafe_code)]

//! WCAG 2.x contrast engine.
//!
//! - [`evaluate`]: contrast ratio and AA/AAA classification
//! - [`adjust`]: bounded search for a foreground that meets a target ratio
//! - [`text`]: black-or-white text selection for a background
//! - [`hex`]: the same operations over hex strings, for callers that hold colors
//!   as `#rrggbb`
//!
//! # Example
//!
//! ```
//! use lumen_contrast::{WcagLevel, hex};
//!
//! assert!(hex::meets_level("#000000", "#ffffff", WcagLevel::Aaa, false).unwrap());
//!
//! let fixed = hex::adjust_for_contrast("#444444", "#121212", 4.5).unwrap();
//! assert!(hex::contrast_ratio(&fixed, "#121212").unwrap() >= 4.5);
//!
//! assert_eq!(hex::pick_text_color("#000000"), "#ffffff");
//! ```

pub mod adjust;
pub mod evaluate;
pub mod hex;
pub mod text;

pub use adjust::{
    AdjustOptions, Adjustment, DEFAULT_TARGET_RATIO, Direction, MAX_ADJUST_ITERATIONS,
    adjust_for_contrast, adjust_for_level,
};
pub use evaluate::{ContrastReport, WcagLevel, contrast_ratio, meets_level};
pub use lumen_color::{ColorError, FormatIssue, Rgb};
pub use text::pick_text_color;

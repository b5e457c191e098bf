#![forbid(unsafe_code)]

//! Color primitives for lumen: sRGB channel triples, the hex codec, and WCAG
//! relative luminance.
//!
//! Everything here is a pure function over `Copy` values.
//!
//! ```
//! use lumen_color::{Rgb, hex, luminance};
//!
//! let gray = hex::decode("#777").unwrap();
//! assert_eq!(gray, Rgb::new(0x77, 0x77, 0x77));
//! assert_eq!(hex::encode(gray), "#777777");
//! assert!(luminance::relative_luminance(gray) < 0.5);
//! ```

pub mod error;
pub mod hex;
pub mod luminance;
pub mod rgb;

pub use error::{ColorError, FormatIssue};
pub use hex::{decode, encode};
pub use luminance::relative_luminance;
pub use rgb::Rgb;

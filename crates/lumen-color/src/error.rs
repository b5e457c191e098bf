#![forbid(unsafe_code)]

//! Error type for hex color decoding.

use std::fmt;

/// What was wrong with a rejected hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// Digit count (after the optional `#`) was not 3 or 6.
    Length(usize),
    /// A character outside `[0-9a-fA-F]` at the given byte offset.
    NonHexDigit {
        /// Byte offset into the digits (after the optional `#`).
        index: usize,
        /// The offending character.
        found: char,
    },
}

/// Errors produced while decoding colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input is not `#RGB` / `#RRGGBB` (with or without the `#`).
    InvalidFormat {
        /// The rejected input, verbatim.
        input: String,
        /// Why it was rejected.
        issue: FormatIssue,
    },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str, issue: FormatIssue) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            issue,
        }
    }

    /// The input that failed to decode.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat { input, .. } => input,
        }
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { input, issue } => match issue {
                FormatIssue::Length(len) => write!(
                    f,
                    "invalid color format {input:?}: expected 3 or 6 hex digits, got {len}"
                ),
                FormatIssue::NonHexDigit { index, found } => write!(
                    f,
                    "invalid color format {input:?}: non-hex character {found:?} at offset {index}"
                ),
            },
        }
    }
}

impl std::error::Error for ColorError {}

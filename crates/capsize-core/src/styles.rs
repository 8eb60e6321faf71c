//! Style object for one computed size.

use crate::values::{Em, LineHeight, Px};

/// `content` value of the trimming pseudo-elements.
pub const PSEUDO_CONTENT: &str = "''";

/// `display` value of the trimming pseudo-elements.
pub const PSEUDO_DISPLAY: &str = "table";

/// `::before` rules that trim the space above the cap height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BeforeStyles {
    pub content: &'static str,
    pub margin_bottom: Em,
    pub display: &'static str,
}

/// `::after` rules that trim the space below the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AfterStyles {
    pub content: &'static str,
    pub margin_top: Em,
    pub display: &'static str,
}

/// Declarations for one element at one size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CapsizeStyles {
    pub font_size: Px,
    pub line_height: LineHeight,
    #[cfg_attr(feature = "serde", serde(rename = "::before"))]
    pub before: BeforeStyles,
    #[cfg_attr(feature = "serde", serde(rename = "::after"))]
    pub after: AfterStyles,
}

impl CapsizeStyles {
    /// Assemble styles from computed values.
    #[must_use]
    pub const fn new(
        font_size: Px,
        line_height: LineHeight,
        cap_height_trim: Em,
        baseline_trim: Em,
    ) -> Self {
        Self {
            font_size,
            line_height,
            before: BeforeStyles {
                content: PSEUDO_CONTENT,
                margin_bottom: cap_height_trim,
                display: PSEUDO_DISPLAY,
            },
            after: AfterStyles {
                content: PSEUDO_CONTENT,
                margin_top: baseline_trim,
                display: PSEUDO_DISPLAY,
            },
        }
    }
}

//! Struct-of-arrays merge of per-breakpoint styles.

use capsize_core::{AfterStyles, BeforeStyles, CapsizeStyles, Em, LineHeight, Px};

/// `::before` rules with one trim per breakpoint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResponsiveBefore {
    pub content: &'static str,
    pub margin_bottom: Vec<Em>,
    pub display: &'static str,
}

/// `::after` rules with one trim per breakpoint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResponsiveAfter {
    pub content: &'static str,
    pub margin_top: Vec<Em>,
    pub display: &'static str,
}

/// Styles for every breakpoint, one vector entry per breakpoint.
///
/// `content` and `display` depend only on the font metrics, so they are
/// stored once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResponsiveStyles {
    pub font_size: Vec<Px>,
    pub line_height: Vec<LineHeight>,
    #[cfg_attr(feature = "serde", serde(rename = "::before"))]
    pub before: ResponsiveBefore,
    #[cfg_attr(feature = "serde", serde(rename = "::after"))]
    pub after: ResponsiveAfter,
}

impl ResponsiveStyles {
    /// Merge per-breakpoint styles, keeping their order.
    ///
    /// Returns `None` for an empty slice. Pseudo-element `content` and
    /// `display` are taken from the first entry.
    #[must_use]
    pub fn merge(styles: &[CapsizeStyles]) -> Option<Self> {
        let (first, _) = styles.split_first()?;
        Some(Self {
            font_size: styles.iter().map(|s| s.font_size).collect(),
            line_height: styles.iter().map(|s| s.line_height).collect(),
            before: ResponsiveBefore {
                content: first.before.content,
                margin_bottom: styles.iter().map(|s| s.before.margin_bottom).collect(),
                display: first.before.display,
            },
            after: ResponsiveAfter {
                content: first.after.content,
                margin_top: styles.iter().map(|s| s.after.margin_top).collect(),
                display: first.after.display,
            },
        })
    }

    /// Number of breakpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.font_size.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.font_size.is_empty()
    }

    /// Styles for breakpoint `index` as a single style object.
    #[must_use]
    pub fn breakpoint(&self, index: usize) -> Option<CapsizeStyles> {
        Some(CapsizeStyles {
            font_size: *self.font_size.get(index)?,
            line_height: *self.line_height.get(index)?,
            before: BeforeStyles {
                content: self.before.content,
                margin_bottom: *self.before.margin_bottom.get(index)?,
                display: self.before.display,
            },
            after: AfterStyles {
                content: self.after.content,
                margin_top: *self.after.margin_top.get(index)?,
                display: self.after.display,
            },
        })
    }

    /// Every breakpoint in order.
    pub fn breakpoints(&self) -> impl Iterator<Item = CapsizeStyles> + '_ {
        (0..self.len()).filter_map(|index| self.breakpoint(index))
    }
}

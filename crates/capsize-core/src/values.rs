//! CSS value types produced by the calculator.
//!
//! Every value is rounded to four decimal places when constructed through
//! [`round`], and renders through [`Display`](fmt::Display) in the shortest
//! form CSS accepts: `48px`, `-0.2168em`, `normal`.

use std::fmt;

/// Decimal places kept in computed values.
pub const PRECISION: i32 = 4;

/// Round `value` to [`PRECISION`] decimal places.
///
/// Negative zero is normalized to zero so it never renders as `-0`.
#[must_use]
pub fn round(value: f64) -> f64 {
    let scale = 10f64.powi(PRECISION);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

// =========================================================================
// Px
// =========================================================================

/// An absolute length in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Px(pub f64);

impl Px {
    /// The numeric pixel value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

// =========================================================================
// Em
// =========================================================================

/// A length relative to the element's font size.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Em(pub f64);

impl Em {
    /// The numeric em value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Em {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}em", self.0)
    }
}

// =========================================================================
// LineHeight
// =========================================================================

/// Value of the CSS `line-height` property.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LineHeight {
    /// The browser default derived from the font's own metrics.
    #[default]
    Normal,
    /// A fixed line box height.
    Px(Px),
}

impl LineHeight {
    /// Fixed height in pixels, or `None` for `normal`.
    #[must_use]
    pub const fn px(self) -> Option<Px> {
        match self {
            Self::Normal => None,
            Self::Px(px) => Some(px),
        }
    }

    /// Whether this is `line-height: normal`.
    #[must_use]
    pub const fn is_normal(self) -> bool {
        matches!(self, Self::Normal)
    }
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Px(px) => fmt::Display::fmt(px, f),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{Em, LineHeight, Px};
    use serde::{Serialize, Serializer};

    impl Serialize for Px {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl Serialize for Em {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl Serialize for LineHeight {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }
}

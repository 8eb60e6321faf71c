//! Errors reported by the single-value calculator.

use thiserror::Error;

/// Reason a set of metrics or sizing options cannot produce styles.
///
/// `field` names use the camelCase spelling of the web tooling
/// (`unitsPerEm`, `capHeight`, `lineGap`) so messages line up with the
/// configuration a caller wrote.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CapsizeError {
    /// A font metric is not finite, or a metric that divides is not positive.
    #[error("invalid font metric `{field}`: {value}")]
    InvalidMetric { field: &'static str, value: f64 },
    /// A requested size (cap height, font size or leading) is not a positive number.
    #[error("`{field}` must be a positive number, got {value}")]
    NonPositiveSize { field: &'static str, value: f64 },
    /// A spacing value is not finite.
    #[error("invalid spacing `{field}`: {value}")]
    InvalidSpacing { field: &'static str, value: f64 },
    /// Cap height plus line gap collapses the line box.
    #[error("resulting line height must be positive, got {value}")]
    NonPositiveLineHeight { value: f64 },
}

/// Standard result type for calculator APIs.
pub type Result<T> = std::result::Result<T, CapsizeError>;

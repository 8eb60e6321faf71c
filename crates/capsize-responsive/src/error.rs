//! Errors for responsive style computation.

use std::fmt;

use thiserror::Error;

/// Name of an input array, as spelled in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    CapHeight,
    FontSize,
    Leading,
    LineGap,
}

impl Field {
    /// camelCase configuration key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CapHeight => "capHeight",
            Self::FontSize => "fontSize",
            Self::Leading => "leading",
            Self::LineGap => "lineGap",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An input array that must not be empty was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("must provide at least one `{field}`")]
pub struct ValidationError {
    pub field: Field,
}

impl ValidationError {
    #[must_use]
    pub const fn empty(field: Field) -> Self {
        Self { field }
    }
}

/// Failure of a responsive computation.
///
/// Either variant means no styles were produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResponsiveError<E> {
    /// Array lengths were rejected before any calculation ran.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The single-value calculator failed for one breakpoint.
    #[error(transparent)]
    Calculator(E),
}

impl<E> ResponsiveError<E> {
    /// The validation failure, if that is what this is.
    #[must_use]
    pub const fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Calculator(_) => None,
        }
    }

    /// The calculator's own error, if that is what this is.
    #[must_use]
    pub const fn as_calculator(&self) -> Option<&E> {
        match self {
            Self::Validation(_) => None,
            Self::Calculator(err) => Some(err),
        }
    }
}

/// Configuration that does not name exactly one size axis and one spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("one of `capHeight` or `fontSize` is required")]
    MissingSize,
    #[error("`capHeight` and `fontSize` cannot be combined")]
    ConflictingSize,
    #[error("one of `leading` or `lineGap` is required")]
    MissingSpacing,
    #[error("`leading` and `lineGap` cannot be combined")]
    ConflictingSpacing,
}

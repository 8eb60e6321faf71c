//! The single-value calculator seam.
//!
//! The broadcaster never does typographic math itself; it hands each aligned
//! pair to a [`StyleCalculator`]. [`Capsize`] is the bundled implementation
//! and any `Fn(&CapsizeOptions) -> Result<CapsizeStyles, E>` works too,
//! which is how tests observe the exact calls made.

use capsize_core::{CapsizeError, CapsizeOptions, CapsizeStyles, create_style_object};

/// Computes styles for one size.
///
/// Implementations must be pure: the same options give the same result.
pub trait StyleCalculator {
    /// Error reported for options the calculator cannot honor.
    type Error;

    /// Compute styles for one breakpoint.
    fn compute(&self, options: &CapsizeOptions) -> Result<CapsizeStyles, Self::Error>;
}

/// The calculator from `capsize-core`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capsize;

impl StyleCalculator for Capsize {
    type Error = CapsizeError;

    fn compute(&self, options: &CapsizeOptions) -> Result<CapsizeStyles, CapsizeError> {
        create_style_object(options)
    }
}

impl<F, E> StyleCalculator for F
where
    F: Fn(&CapsizeOptions) -> Result<CapsizeStyles, E>,
{
    type Error = E;

    fn compute(&self, options: &CapsizeOptions) -> Result<CapsizeStyles, E> {
        self(options)
    }
}

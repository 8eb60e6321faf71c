//! Validation, dispatch and merge for one responsive request.

use capsize_core::CapsizeError;

use crate::broadcast::{Alignment, broadcast};
use crate::calculator::{Capsize, StyleCalculator};
use crate::error::{Field, ResponsiveError, ValidationError};
use crate::merge::ResponsiveStyles;
use crate::options::ResponsiveOptions;

/// Computes [`ResponsiveStyles`] with a given calculator.
///
/// # Example
///
/// ```
/// use capsize_core::FontMetrics;
/// use capsize_responsive::{Alignment, Broadcaster, ResponsiveOptions};
///
/// let metrics = FontMetrics::new(1456.0, 1900.0, -500.0, 0.0, 2048.0);
/// let options = ResponsiveOptions::cap_height_with_line_gap([48.0], [24.0, 48.0], metrics);
///
/// let styles = Broadcaster::new().compute(&options)?;
/// assert_eq!(styles.len(), 1);
///
/// let styles = Broadcaster::new().alignment(Alignment::Longest).compute(&options)?;
/// assert_eq!(styles.len(), 2);
/// # Ok::<(), capsize_responsive::ResponsiveError<capsize_core::CapsizeError>>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Broadcaster<C = Capsize> {
    calculator: C,
    alignment: Alignment,
}

impl Broadcaster {
    /// Broadcaster over the bundled calculator with [`Alignment::Axis`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calculator: Capsize,
            alignment: Alignment::Axis,
        }
    }
}

impl<C> Broadcaster<C> {
    /// Broadcaster over a custom calculator.
    #[must_use]
    pub const fn with_calculator(calculator: C) -> Self {
        Self {
            calculator,
            alignment: Alignment::Axis,
        }
    }

    /// Set how array lengths are aligned.
    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// The calculator in use.
    #[must_use]
    pub const fn calculator(&self) -> &C {
        &self.calculator
    }
}

impl<C: StyleCalculator> Broadcaster<C> {
    /// Compute styles for every breakpoint.
    ///
    /// Validation happens before any calculation. The first calculator
    /// error aborts the call and is returned as-is.
    pub fn compute(
        &self,
        options: &ResponsiveOptions,
    ) -> Result<ResponsiveStyles, ResponsiveError<C::Error>> {
        validate(options)?;

        let axis = options.axis();
        let spacing = options.spacing();
        let pairs = broadcast(axis, spacing, self.alignment);

        tracing::debug!(
            axis = %options.axis_field(),
            spacing = %options.spacing_field(),
            axis_len = axis.len(),
            spacing_len = spacing.len(),
            breakpoints = pairs.len(),
            alignment = %self.alignment,
            "computing responsive styles"
        );
        if self.alignment == Alignment::Axis && spacing.len() > axis.len() {
            tracing::debug!(
                ignored = spacing.len() - axis.len(),
                "spacing values beyond the last breakpoint are ignored"
            );
        }

        let styles = pairs
            .map(|(axis_value, spacing_value)| {
                self.calculator
                    .compute(&options.single(axis_value, spacing_value))
                    .map_err(ResponsiveError::Calculator)
            })
            .collect::<Result<Vec<_>, _>>()?;

        ResponsiveStyles::merge(&styles)
            .ok_or_else(|| ValidationError::empty(options.axis_field()).into())
    }
}

/// Check array lengths for `options`.
///
/// The size axis and `lineGap` need at least one value; an empty `leading`
/// means the font's default line height at every breakpoint.
pub fn validate(options: &ResponsiveOptions) -> Result<(), ValidationError> {
    if options.axis().is_empty() {
        return Err(ValidationError::empty(options.axis_field()));
    }
    if options.spacing_field() == Field::LineGap && options.spacing().is_empty() {
        return Err(ValidationError::empty(Field::LineGap));
    }
    Ok(())
}

/// Compute responsive styles with the bundled calculator.
///
/// ```
/// use capsize_core::FontMetrics;
/// use capsize_responsive::{ResponsiveOptions, responsive_capsize};
///
/// let metrics = FontMetrics::new(1456.0, 1900.0, -500.0, 0.0, 2048.0);
/// let styles = responsive_capsize(&ResponsiveOptions::font_size_with_leading(
///     [16.0, 24.0],
///     [24.0],
///     metrics,
/// ))?;
/// assert_eq!(styles.font_size[1].to_string(), "24px");
/// assert_eq!(styles.line_height[1].to_string(), "24px");
/// # Ok::<(), capsize_responsive::ResponsiveError<capsize_core::CapsizeError>>(())
/// ```
pub fn responsive_capsize(
    options: &ResponsiveOptions,
) -> Result<ResponsiveStyles, ResponsiveError<CapsizeError>> {
    Broadcaster::new().compute(options)
}

//! Responsive input shapes.
//!
//! A request chooses one size axis (`capHeight` or `fontSize`) and one
//! spacing (`leading` or `lineGap`), each as an array in breakpoint order.
//! The four combinations are the four variants of [`ResponsiveOptions`].

use capsize_core::{CapsizeOptions, FontMetrics, LineSpacing, Size};

use crate::error::Field;

/// One responsive request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "raw::RawOptions"))]
pub enum ResponsiveOptions {
    CapHeightWithLeading {
        cap_height: Vec<f64>,
        leading: Vec<f64>,
        font_metrics: FontMetrics,
    },
    CapHeightWithLineGap {
        cap_height: Vec<f64>,
        line_gap: Vec<f64>,
        font_metrics: FontMetrics,
    },
    FontSizeWithLeading {
        font_size: Vec<f64>,
        leading: Vec<f64>,
        font_metrics: FontMetrics,
    },
    FontSizeWithLineGap {
        font_size: Vec<f64>,
        line_gap: Vec<f64>,
        font_metrics: FontMetrics,
    },
}

impl ResponsiveOptions {
    #[must_use]
    pub fn cap_height_with_leading(
        cap_height: impl Into<Vec<f64>>,
        leading: impl Into<Vec<f64>>,
        font_metrics: FontMetrics,
    ) -> Self {
        Self::CapHeightWithLeading {
            cap_height: cap_height.into(),
            leading: leading.into(),
            font_metrics,
        }
    }

    #[must_use]
    pub fn cap_height_with_line_gap(
        cap_height: impl Into<Vec<f64>>,
        line_gap: impl Into<Vec<f64>>,
        font_metrics: FontMetrics,
    ) -> Self {
        Self::CapHeightWithLineGap {
            cap_height: cap_height.into(),
            line_gap: line_gap.into(),
            font_metrics,
        }
    }

    #[must_use]
    pub fn font_size_with_leading(
        font_size: impl Into<Vec<f64>>,
        leading: impl Into<Vec<f64>>,
        font_metrics: FontMetrics,
    ) -> Self {
        Self::FontSizeWithLeading {
            font_size: font_size.into(),
            leading: leading.into(),
            font_metrics,
        }
    }

    #[must_use]
    pub fn font_size_with_line_gap(
        font_size: impl Into<Vec<f64>>,
        line_gap: impl Into<Vec<f64>>,
        font_metrics: FontMetrics,
    ) -> Self {
        Self::FontSizeWithLineGap {
            font_size: font_size.into(),
            line_gap: line_gap.into(),
            font_metrics,
        }
    }

    /// Which size axis this request uses.
    #[must_use]
    pub const fn axis_field(&self) -> Field {
        match self {
            Self::CapHeightWithLeading { .. } | Self::CapHeightWithLineGap { .. } => {
                Field::CapHeight
            }
            Self::FontSizeWithLeading { .. } | Self::FontSizeWithLineGap { .. } => {
                Field::FontSize
            }
        }
    }

    /// Which spacing this request uses.
    #[must_use]
    pub const fn spacing_field(&self) -> Field {
        match self {
            Self::CapHeightWithLeading { .. } | Self::FontSizeWithLeading { .. } => Field::Leading,
            Self::CapHeightWithLineGap { .. } | Self::FontSizeWithLineGap { .. } => Field::LineGap,
        }
    }

    /// Size values in breakpoint order.
    #[must_use]
    pub fn axis(&self) -> &[f64] {
        match self {
            Self::CapHeightWithLeading { cap_height, .. }
            | Self::CapHeightWithLineGap { cap_height, .. } => cap_height,
            Self::FontSizeWithLeading { font_size, .. }
            | Self::FontSizeWithLineGap { font_size, .. } => font_size,
        }
    }

    /// Spacing values in breakpoint order.
    #[must_use]
    pub fn spacing(&self) -> &[f64] {
        match self {
            Self::CapHeightWithLeading { leading, .. }
            | Self::FontSizeWithLeading { leading, .. } => leading,
            Self::CapHeightWithLineGap { line_gap, .. }
            | Self::FontSizeWithLineGap { line_gap, .. } => line_gap,
        }
    }

    /// Metrics shared by every breakpoint.
    #[must_use]
    pub const fn font_metrics(&self) -> &FontMetrics {
        match self {
            Self::CapHeightWithLeading { font_metrics, .. }
            | Self::CapHeightWithLineGap { font_metrics, .. }
            | Self::FontSizeWithLeading { font_metrics, .. }
            | Self::FontSizeWithLineGap { font_metrics, .. } => font_metrics,
        }
    }

    /// Single-value options for one aligned pair.
    #[must_use]
    pub fn single(&self, axis: f64, spacing: Option<f64>) -> CapsizeOptions {
        let (size, spacing) = match self {
            Self::CapHeightWithLeading { .. } => {
                (Size::CapHeight(axis), spacing.map(LineSpacing::Leading))
            }
            Self::CapHeightWithLineGap { .. } => {
                (Size::CapHeight(axis), spacing.map(LineSpacing::LineGap))
            }
            Self::FontSizeWithLeading { .. } => {
                (Size::FontSize(axis), spacing.map(LineSpacing::Leading))
            }
            Self::FontSizeWithLineGap { .. } => {
                (Size::FontSize(axis), spacing.map(LineSpacing::LineGap))
            }
        };
        CapsizeOptions {
            size,
            spacing,
            font_metrics: *self.font_metrics(),
        }
    }
}

#[cfg(feature = "serde")]
mod raw {
    use capsize_core::FontMetrics;

    use super::ResponsiveOptions;
    use crate::error::OptionsError;

    /// Field-presence form used by JSON configuration.
    #[derive(serde::Deserialize)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    pub(super) struct RawOptions {
        cap_height: Option<Vec<f64>>,
        font_size: Option<Vec<f64>>,
        leading: Option<Vec<f64>>,
        line_gap: Option<Vec<f64>>,
        font_metrics: FontMetrics,
    }

    impl TryFrom<RawOptions> for ResponsiveOptions {
        type Error = OptionsError;

        fn try_from(raw: RawOptions) -> Result<Self, OptionsError> {
            let font_metrics = raw.font_metrics;
            match (raw.cap_height, raw.font_size, raw.leading, raw.line_gap) {
                (Some(_), Some(_), _, _) => Err(OptionsError::ConflictingSize),
                (None, None, _, _) => Err(OptionsError::MissingSize),
                (_, _, Some(_), Some(_)) => Err(OptionsError::ConflictingSpacing),
                (_, _, None, None) => Err(OptionsError::MissingSpacing),
                (Some(cap_height), None, Some(leading), None) => Ok(Self::CapHeightWithLeading {
                    cap_height,
                    leading,
                    font_metrics,
                }),
                (Some(cap_height), None, None, Some(line_gap)) => Ok(Self::CapHeightWithLineGap {
                    cap_height,
                    line_gap,
                    font_metrics,
                }),
                (None, Some(font_size), Some(leading), None) => Ok(Self::FontSizeWithLeading {
                    font_size,
                    leading,
                    font_metrics,
                }),
                (None, Some(font_size), None, Some(line_gap)) => Ok(Self::FontSizeWithLineGap {
                    font_size,
                    line_gap,
                    font_metrics,
                }),
            }
        }
    }
}

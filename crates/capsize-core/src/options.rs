//! Single-value sizing options.
//!
//! A size is anchored either on the rendered cap height or on the nominal
//! font size, and the line box is set either by an absolute leading or by a
//! gap added on top of the cap height. Each pair is an enum so a request
//! can never name both halves of a pair.

use std::fmt;

use crate::metrics::FontMetrics;

/// What the requested size measures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Size {
    /// Target height of capital letters, in pixels.
    CapHeight(f64),
    /// Nominal CSS `font-size`, in pixels.
    FontSize(f64),
}

impl Size {
    /// The raw pixel value.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::CapHeight(v) | Self::FontSize(v) => v,
        }
    }

    /// Option name as written in configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CapHeight(_) => "capHeight",
            Self::FontSize(_) => "fontSize",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name(), self.value())
    }
}

/// How the line box height is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSpacing {
    /// Absolute distance between consecutive baselines, in pixels.
    Leading(f64),
    /// Space added on top of the cap height, in pixels.
    LineGap(f64),
}

impl LineSpacing {
    /// The raw pixel value.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Leading(v) | Self::LineGap(v) => v,
        }
    }

    /// Option name as written in configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Leading(_) => "leading",
            Self::LineGap(_) => "lineGap",
        }
    }
}

impl fmt::Display for LineSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name(), self.value())
    }
}

/// Input to the single-value calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsizeOptions {
    /// Requested size.
    pub size: Size,
    /// Line spacing; `None` keeps `line-height: normal`.
    pub spacing: Option<LineSpacing>,
    /// Metrics of the font being sized.
    pub font_metrics: FontMetrics,
}

impl CapsizeOptions {
    /// Options for `size` with the font's default line height.
    #[must_use]
    pub const fn new(size: Size, font_metrics: FontMetrics) -> Self {
        Self {
            size,
            spacing: None,
            font_metrics,
        }
    }

    /// Set the line spacing.
    #[must_use]
    pub const fn spacing(mut self, spacing: LineSpacing) -> Self {
        self.spacing = Some(spacing);
        self
    }

    /// Size by cap height.
    #[must_use]
    pub const fn cap_height(cap_height: f64, font_metrics: FontMetrics) -> Self {
        Self::new(Size::CapHeight(cap_height), font_metrics)
    }

    /// Size by font size.
    #[must_use]
    pub const fn font_size(font_size: f64, font_metrics: FontMetrics) -> Self {
        Self::new(Size::FontSize(font_size), font_metrics)
    }

    /// Set an absolute leading.
    #[must_use]
    pub const fn leading(self, leading: f64) -> Self {
        self.spacing(LineSpacing::Leading(leading))
    }

    /// Set a line gap added to the cap height.
    #[must_use]
    pub const fn line_gap(self, line_gap: f64) -> Self {
        self.spacing(LineSpacing::LineGap(line_gap))
    }
}

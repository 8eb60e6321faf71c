//! Single-value style calculation.
//!
//! Given font metrics and a requested size, compute the `font-size`,
//! `line-height` and the two negative margins that trim the line box down
//! to the cap height:
//!
//! ```text
//!   ┌──────────────────┐  ─┐
//!   │  ascent          │   │ cap_height_trim (::before margin-bottom)
//!   │ ┌──────────────┐ │  ─┘
//!   │ │  CAP HEIGHT  │ │
//!   │ └──────────────┘ │  ─── baseline
//!   │  descent         │   │ baseline_trim (::after margin-top)
//!   └──────────────────┘  ─┘
//! ```
//!
//! When a line height is specified, half of the difference between it and
//! the font's natural line box is added back to each trim, since the browser
//! distributes extra leading evenly above and below the glyphs.

use crate::error::{CapsizeError, Result};
use crate::metrics::FontMetrics;
use crate::options::{CapsizeOptions, LineSpacing, Size};
use crate::styles::CapsizeStyles;
use crate::values::{Em, LineHeight, Px, round};

/// Rounded intermediate values behind a [`CapsizeStyles`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedValues {
    /// CSS `font-size` in pixels.
    pub font_size: f64,
    /// CSS `line-height` in pixels, `None` for `normal`.
    pub line_height: Option<f64>,
    /// Space above the cap height, in em (negative trims).
    pub cap_height_trim: f64,
    /// Space below the baseline, in em (negative trims).
    pub baseline_trim: f64,
}

/// Compute the rounded values for one size.
pub fn precompute_values(options: &CapsizeOptions) -> Result<ComputedValues> {
    let metrics = &options.font_metrics;
    metrics.validate()?;

    let requested = options.size.value();
    if !requested.is_finite() || requested <= 0.0 {
        return Err(CapsizeError::NonPositiveSize {
            field: options.size.name(),
            value: requested,
        });
    }

    let cap_height_scale = metrics.cap_height_scale();
    let (font_size, cap_height) = match options.size {
        Size::CapHeight(cap_height) => (cap_height / cap_height_scale, cap_height),
        Size::FontSize(font_size) => (font_size, font_size * cap_height_scale),
    };

    let line_height = match options.spacing {
        None => None,
        Some(LineSpacing::Leading(leading)) => {
            if !leading.is_finite() || leading <= 0.0 {
                return Err(CapsizeError::NonPositiveSize {
                    field: "leading",
                    value: leading,
                });
            }
            Some(leading)
        }
        Some(LineSpacing::LineGap(line_gap)) => {
            if !line_gap.is_finite() {
                return Err(CapsizeError::InvalidSpacing {
                    field: "lineGap",
                    value: line_gap,
                });
            }
            let line_height = cap_height + line_gap;
            if line_height <= 0.0 {
                return Err(CapsizeError::NonPositiveLineHeight { value: line_height });
            }
            Some(line_height)
        }
    };

    let units_per_em = metrics.units_per_em;
    let line_height_normal = metrics.content_area_scale() * font_size;
    let ascent_scale = metrics.ascent / units_per_em;
    let descent_scale = metrics.descent.abs() / units_per_em;
    let line_gap_scale = metrics.line_gap / units_per_em;

    let allow_for_line_height = |trim: f64| match line_height {
        Some(specified) => trim - ((line_height_normal - specified) / 2.0) / font_size,
        None => trim,
    };

    let cap_height_trim =
        -allow_for_line_height(ascent_scale - cap_height_scale + line_gap_scale / 2.0);
    let baseline_trim = -allow_for_line_height(descent_scale + line_gap_scale / 2.0);

    tracing::trace!(
        size = %options.size,
        spacing = ?options.spacing,
        font_size,
        cap_height_trim,
        baseline_trim,
        "computed capsize values"
    );

    Ok(ComputedValues {
        font_size: round(font_size),
        line_height: line_height.map(round),
        cap_height_trim: round(cap_height_trim),
        baseline_trim: round(baseline_trim),
    })
}

/// Compute the style object for one size.
///
/// # Example
///
/// ```
/// use capsize_core::{CapsizeOptions, FontMetrics, create_style_object};
///
/// let metrics = FontMetrics::new(1456.0, 1900.0, -500.0, 0.0, 2048.0);
/// let styles = create_style_object(&CapsizeOptions::font_size(48.0, metrics).leading(72.0))?;
/// assert_eq!(styles.font_size.to_string(), "48px");
/// assert_eq!(styles.line_height.to_string(), "72px");
/// assert_eq!(styles.before.margin_bottom.to_string(), "-0.3809em");
/// # Ok::<(), capsize_core::CapsizeError>(())
/// ```
pub fn create_style_object(options: &CapsizeOptions) -> Result<CapsizeStyles> {
    let values = precompute_values(options)?;
    let line_height = match values.line_height {
        Some(px) => LineHeight::Px(Px(px)),
        None => LineHeight::Normal,
    };
    Ok(CapsizeStyles::new(
        Px(values.font_size),
        line_height,
        Em(values.cap_height_trim),
        Em(values.baseline_trim),
    ))
}

/// Rendered cap height, in pixels, of text set at `font_size`.
pub fn get_cap_height(font_size: f64, metrics: &FontMetrics) -> Result<f64> {
    metrics.validate()?;
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(CapsizeError::NonPositiveSize {
            field: "fontSize",
            value: font_size,
        });
    }
    Ok(round(font_size * metrics.cap_height_scale()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: FontMetrics = FontMetrics::new(1456.0, 1900.0, -500.0, 0.0, 2048.0);

    fn styles(options: CapsizeOptions) -> CapsizeStyles {
        create_style_object(&options).unwrap()
    }

    // ── Sizing ────────────────────────────────────────────────────────

    #[test]
    fn cap_height_with_leading() {
        let s = styles(CapsizeOptions::cap_height(48.0, METRICS).leading(72.0));
        assert_eq!(s.font_size, Px(67.5165));
        assert_eq!(s.line_height, LineHeight::Px(Px(72.0)));
        assert_eq!(s.before.margin_bottom, Em(-0.1641));
        assert_eq!(s.after.margin_top, Em(-0.1914));
    }

    #[test]
    fn cap_height_with_line_gap() {
        // 48px cap height + 24px gap is the same 72px line box as above.
        let gap = styles(CapsizeOptions::cap_height(48.0, METRICS).line_gap(24.0));
        let leading = styles(CapsizeOptions::cap_height(48.0, METRICS).leading(72.0));
        assert_eq!(gap, leading);
    }

    #[test]
    fn font_size_with_leading() {
        let s = styles(CapsizeOptions::font_size(48.0, METRICS).leading(72.0));
        assert_eq!(s.font_size, Px(48.0));
        assert_eq!(s.line_height, LineHeight::Px(Px(72.0)));
        assert_eq!(s.before.margin_bottom, Em(-0.3809));
        assert_eq!(s.after.margin_top, Em(-0.4082));
    }

    #[test]
    fn font_size_with_line_gap() {
        let s = styles(CapsizeOptions::font_size(48.0, METRICS).line_gap(24.0));
        assert_eq!(s.font_size, Px(48.0));
        assert_eq!(s.line_height, LineHeight::Px(Px(58.125)));
        assert_eq!(s.before.margin_bottom, Em(-0.2363));
        assert_eq!(s.after.margin_top, Em(-0.2637));
    }

    #[test]
    fn no_spacing_keeps_normal_line_height() {
        let s = styles(CapsizeOptions::cap_height(48.0, METRICS));
        assert_eq!(s.line_height, LineHeight::Normal);
        assert_eq!(s.before.margin_bottom, Em(-0.2168));
        assert_eq!(s.after.margin_top, Em(-0.2441));
    }

    #[test]
    fn normal_trims_do_not_depend_on_size() {
        let small = styles(CapsizeOptions::font_size(16.0, METRICS));
        let large = styles(CapsizeOptions::cap_height(96.0, METRICS));
        assert_eq!(small.before, large.before);
        assert_eq!(small.after, large.after);
    }

    #[test]
    fn tight_leading_gives_positive_trim() {
        let s = styles(CapsizeOptions::cap_height(96.0, METRICS).leading(72.0));
        assert_eq!(s.font_size, Px(135.033));
        assert_eq!(s.before.margin_bottom, Em(0.1025));
        assert_eq!(s.after.margin_top, Em(0.0752));
    }

    #[test]
    fn metric_line_gap_is_split() {
        let metrics = FontMetrics::new(700.0, 1000.0, -200.0, 100.0, 1000.0);
        let s = styles(CapsizeOptions::font_size(20.0, metrics).line_gap(10.0));
        assert_eq!(s.line_height, LineHeight::Px(Px(24.0)));
        assert_eq!(s.before.margin_bottom, Em(-0.3));
        assert_eq!(s.after.margin_top, Em(-0.2));
    }

    #[test]
    fn precompute_matches_styles() {
        let opts = CapsizeOptions::font_size(48.0, METRICS).line_gap(24.0);
        let v = precompute_values(&opts).unwrap();
        assert_eq!(
            v,
            ComputedValues {
                font_size: 48.0,
                line_height: Some(58.125),
                cap_height_trim: -0.2363,
                baseline_trim: -0.2637,
            }
        );
    }

    #[test]
    fn cap_height_for_font_size() {
        assert_eq!(get_cap_height(48.0, &METRICS), Ok(34.125));
    }

    // ── Errors ────────────────────────────────────────────────────────

    #[test]
    fn zero_size_rejected() {
        let err = create_style_object(&CapsizeOptions::cap_height(0.0, METRICS)).unwrap_err();
        assert_eq!(
            err,
            CapsizeError::NonPositiveSize {
                field: "capHeight",
                value: 0.0
            }
        );
    }

    #[test]
    fn negative_font_size_rejected() {
        let err = create_style_object(&CapsizeOptions::font_size(-12.0, METRICS)).unwrap_err();
        assert!(matches!(
            err,
            CapsizeError::NonPositiveSize {
                field: "fontSize",
                ..
            }
        ));
    }

    #[test]
    fn zero_leading_rejected() {
        let err =
            create_style_object(&CapsizeOptions::font_size(16.0, METRICS).leading(0.0)).unwrap_err();
        assert!(matches!(
            err,
            CapsizeError::NonPositiveSize {
                field: "leading",
                ..
            }
        ));
    }

    #[test]
    fn collapsing_line_gap_rejected() {
        let err = create_style_object(&CapsizeOptions::cap_height(10.0, METRICS).line_gap(-10.0))
            .unwrap_err();
        assert_eq!(err, CapsizeError::NonPositiveLineHeight { value: 0.0 });
    }

    #[test]
    fn infinite_line_gap_rejected() {
        let err = create_style_object(
            &CapsizeOptions::cap_height(10.0, METRICS).line_gap(f64::INFINITY),
        )
        .unwrap_err();
        assert!(matches!(err, CapsizeError::InvalidSpacing { .. }));
    }

    #[test]
    fn invalid_metrics_rejected_before_size() {
        let metrics = FontMetrics {
            units_per_em: 0.0,
            ..METRICS
        };
        let err = create_style_object(&CapsizeOptions::cap_height(-1.0, metrics)).unwrap_err();
        assert!(matches!(
            err,
            CapsizeError::InvalidMetric {
                field: "unitsPerEm",
                ..
            }
        ));
    }

    // ── Determinism ───────────────────────────────────────────────────

    #[test]
    fn same_inputs_same_outputs() {
        let opts = CapsizeOptions::cap_height(37.5, METRICS).line_gap(12.25);
        assert_eq!(create_style_object(&opts), create_style_object(&opts));
    }
}

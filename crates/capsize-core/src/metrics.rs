//! Vertical font metrics in font design units.

use crate::error::{CapsizeError, Result};

/// Vertical geometry of one typeface, in font units.
///
/// Values come straight from the font's `head`, `hhea`/`OS/2` tables.
/// `descent` is usually negative there; only its magnitude is used.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FontMetrics {
    /// Height of capital letters above the baseline.
    pub cap_height: f64,
    /// Distance from the baseline to the top of the line box.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the line box.
    pub descent: f64,
    /// Extra gap the font recommends between line boxes.
    pub line_gap: f64,
    /// Font units per em square.
    pub units_per_em: f64,
}

impl FontMetrics {
    /// Build metrics from raw table values.
    #[must_use]
    pub const fn new(
        cap_height: f64,
        ascent: f64,
        descent: f64,
        line_gap: f64,
        units_per_em: f64,
    ) -> Self {
        Self {
            cap_height,
            ascent,
            descent,
            line_gap,
            units_per_em,
        }
    }

    /// Check that every metric is usable as a divisor or addend.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("capHeight", self.cap_height),
            ("ascent", self.ascent),
            ("descent", self.descent),
            ("lineGap", self.line_gap),
            ("unitsPerEm", self.units_per_em),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(CapsizeError::InvalidMetric { field, value });
            }
        }
        if self.units_per_em <= 0.0 {
            return Err(CapsizeError::InvalidMetric {
                field: "unitsPerEm",
                value: self.units_per_em,
            });
        }
        if self.cap_height <= 0.0 {
            return Err(CapsizeError::InvalidMetric {
                field: "capHeight",
                value: self.cap_height,
            });
        }
        Ok(())
    }

    /// Cap height as a fraction of the em square.
    #[must_use]
    pub fn cap_height_scale(&self) -> f64 {
        self.cap_height / self.units_per_em
    }

    /// Height of the default (`line-height: normal`) line box as a fraction
    /// of the em square.
    #[must_use]
    pub fn content_area_scale(&self) -> f64 {
        (self.ascent + self.line_gap + self.descent.abs()) / self.units_per_em
    }
}

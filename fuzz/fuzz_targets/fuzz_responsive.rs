#![no_main]

use arbitrary::Arbitrary;
use capsize_core::FontMetrics;
use capsize_responsive::{Alignment, Broadcaster, ResponsiveError, ResponsiveOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    by_cap_height: bool,
    line_gap: bool,
    longest: bool,
    axis: Vec<f64>,
    spacing: Vec<f64>,
    metrics: (f64, f64, f64, f64, f64),
}

fuzz_target!(|input: Input| {
    if input.axis.len() > 256 || input.spacing.len() > 256 {
        return;
    }

    let (cap_height, ascent, descent, line_gap, upm) = input.metrics;
    let metrics = FontMetrics::new(cap_height, ascent, descent, line_gap, upm);
    let (axis, spacing) = (input.axis, input.spacing);
    let options = match (input.by_cap_height, input.line_gap) {
        (true, true) => ResponsiveOptions::cap_height_with_line_gap(axis, spacing, metrics),
        (true, false) => ResponsiveOptions::cap_height_with_leading(axis, spacing, metrics),
        (false, true) => ResponsiveOptions::font_size_with_line_gap(axis, spacing, metrics),
        (false, false) => ResponsiveOptions::font_size_with_leading(axis, spacing, metrics),
    };
    let alignment = if input.longest {
        Alignment::Longest
    } else {
        Alignment::Axis
    };

    // compute must never panic.
    match Broadcaster::new().alignment(alignment).compute(&options) {
        Ok(styles) => {
            let expected = alignment.breakpoints(options.axis().len(), options.spacing().len());
            assert_eq!(styles.len(), expected);
            assert_eq!(styles.line_height.len(), expected);
            assert_eq!(styles.before.margin_bottom.len(), expected);
            assert_eq!(styles.after.margin_top.len(), expected);
        }
        Err(ResponsiveError::Validation(_)) => {
            // Only an empty array fails validation.
            assert!(options.axis().is_empty() || options.spacing().is_empty());
        }
        Err(ResponsiveError::Calculator(_)) => {}
    }
});

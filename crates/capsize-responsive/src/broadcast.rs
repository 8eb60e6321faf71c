//! Zip-with-padding alignment of axis and spacing arrays.
//!
//! Breakpoints are driven by the axis array. Each axis value is paired with
//! the spacing value at the same index; once the spacing array runs out its
//! last value is reused, and an empty spacing array pairs every axis value
//! with `None`. Padding never substitutes zero.

use std::fmt;
use std::iter::FusedIterator;

/// How many breakpoints a pair of arrays produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// One breakpoint per axis value; spacing values past the end of the
    /// axis array are ignored.
    #[default]
    Axis,
    /// One breakpoint per element of the longer array; the shorter array
    /// is padded with its last value.
    Longest,
}

impl Alignment {
    /// Number of breakpoints for arrays of length `axis_len` and `spacing_len`.
    ///
    /// An empty axis always yields zero breakpoints.
    #[must_use]
    pub const fn breakpoints(self, axis_len: usize, spacing_len: usize) -> usize {
        if axis_len == 0 {
            return 0;
        }
        match self {
            Self::Axis => axis_len,
            Self::Longest => {
                if spacing_len > axis_len {
                    spacing_len
                } else {
                    axis_len
                }
            }
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axis => write!(f, "axis"),
            Self::Longest => write!(f, "longest"),
        }
    }
}

/// Iterator over aligned `(axis, spacing)` pairs. See [`broadcast`].
#[derive(Debug, Clone)]
pub struct Broadcast<'a, A, B> {
    axis: &'a [A],
    spacing: &'a [B],
    index: usize,
    len: usize,
}

/// Pair up `axis` and `spacing` under `alignment`.
///
/// ```
/// use capsize_responsive::{Alignment, broadcast};
///
/// let pairs: Vec<_> = broadcast(&[48.0, 96.0], &[24.0], Alignment::Axis).collect();
/// assert_eq!(pairs, [(48.0, Some(24.0)), (96.0, Some(24.0))]);
///
/// let pairs: Vec<_> = broadcast(&[48.0], &[24.0, 48.0], Alignment::Axis).collect();
/// assert_eq!(pairs, [(48.0, Some(24.0))]);
///
/// let pairs: Vec<(f64, Option<f64>)> = broadcast(&[16.0, 20.0], &[], Alignment::Axis).collect();
/// assert_eq!(pairs, [(16.0, None), (20.0, None)]);
/// ```
#[must_use]
pub fn broadcast<'a, A: Copy, B: Copy>(
    axis: &'a [A],
    spacing: &'a [B],
    alignment: Alignment,
) -> Broadcast<'a, A, B> {
    Broadcast {
        axis,
        spacing,
        index: 0,
        len: alignment.breakpoints(axis.len(), spacing.len()),
    }
}

/// Element `index` of `values`, or its last element once past the end.
fn padded<T: Copy>(values: &[T], index: usize) -> Option<T> {
    values.get(index).or_else(|| values.last()).copied()
}

impl<A: Copy, B: Copy> Iterator for Broadcast<'_, A, B> {
    type Item = (A, Option<B>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }
        let axis = padded(self.axis, self.index)?;
        let spacing = padded(self.spacing, self.index);
        self.index += 1;
        Some((axis, spacing))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<A: Copy, B: Copy> ExactSizeIterator for Broadcast<'_, A, B> {}

impl<A: Copy, B: Copy> FusedIterator for Broadcast<'_, A, B> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(axis: &[f64], spacing: &[f64], alignment: Alignment) -> Vec<(f64, Option<f64>)> {
        broadcast(axis, spacing, alignment).collect()
    }

    // ── Alignment::Axis ───────────────────────────────────────────────

    #[test]
    fn equal_lengths_zip() {
        assert_eq!(
            pairs(&[48.0, 96.0], &[24.0, 48.0], Alignment::Axis),
            [(48.0, Some(24.0)), (96.0, Some(48.0))]
        );
    }

    #[test]
    fn short_spacing_repeats_last() {
        assert_eq!(
            pairs(&[12.0, 16.0, 24.0, 32.0], &[4.0, 8.0], Alignment::Axis),
            [
                (12.0, Some(4.0)),
                (16.0, Some(8.0)),
                (24.0, Some(8.0)),
                (32.0, Some(8.0)),
            ]
        );
    }

    #[test]
    fn long_spacing_truncated() {
        assert_eq!(
            pairs(&[48.0], &[24.0, 48.0, 96.0], Alignment::Axis),
            [(48.0, Some(24.0))]
        );
    }

    #[test]
    fn empty_spacing_is_none() {
        assert_eq!(
            pairs(&[10.0, 20.0, 30.0], &[], Alignment::Axis),
            [(10.0, None), (20.0, None), (30.0, None)]
        );
    }

    #[test]
    fn empty_axis_yields_nothing() {
        assert!(pairs(&[], &[1.0, 2.0], Alignment::Axis).is_empty());
        assert!(pairs(&[], &[1.0, 2.0], Alignment::Longest).is_empty());
    }

    #[test]
    fn order_preserved() {
        let axis = [96.0, 12.0, 48.0, 24.0];
        let got: Vec<f64> = pairs(&axis, &[1.0], Alignment::Axis)
            .into_iter()
            .map(|(a, _)| a)
            .collect();
        assert_eq!(got, axis);
    }

    // ── Alignment::Longest ────────────────────────────────────────────

    #[test]
    fn longest_pads_axis() {
        assert_eq!(
            pairs(&[48.0], &[24.0, 48.0], Alignment::Longest),
            [(48.0, Some(24.0)), (48.0, Some(48.0))]
        );
    }

    #[test]
    fn longest_pads_spacing() {
        assert_eq!(
            pairs(&[48.0, 96.0], &[24.0], Alignment::Longest),
            [(48.0, Some(24.0)), (96.0, Some(24.0))]
        );
    }

    #[test]
    fn longest_with_empty_spacing() {
        assert_eq!(
            pairs(&[48.0, 96.0], &[], Alignment::Longest),
            [(48.0, None), (96.0, None)]
        );
    }

    // ── Iterator contract ─────────────────────────────────────────────

    #[test]
    fn exact_size() {
        let mut it = broadcast(&[1.0, 2.0, 3.0], &[0.5], Alignment::Axis);
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
        it.by_ref().for_each(drop);
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn breakpoint_counts() {
        assert_eq!(Alignment::Axis.breakpoints(2, 5), 2);
        assert_eq!(Alignment::Longest.breakpoints(2, 5), 5);
        assert_eq!(Alignment::Longest.breakpoints(3, 1), 3);
        assert_eq!(Alignment::Longest.breakpoints(0, 4), 0);
    }

    #[test]
    fn alignment_display() {
        assert_eq!(Alignment::Axis.to_string(), "axis");
        assert_eq!(Alignment::Longest.to_string(), "longest");
        assert_eq!(Alignment::default(), Alignment::Axis);
    }
}

#![forbid(unsafe_code)]

//! Cap-height styles for several breakpoints at once.
//!
//! # Role in capsize-rs
//! Responsive designs use a different size at each breakpoint. This crate
//! takes arrays of sizes and spacings, aligns them, runs the single-value
//! calculator once per breakpoint and merges the results into one
//! struct-of-arrays value that a stylesheet generator can index by
//! breakpoint.
//!
//! # This crate provides
//! - [`ResponsiveOptions`], one variant per input shape.
//! - [`Broadcaster`] and [`responsive_capsize`] to compute styles.
//! - [`broadcast`] and [`Alignment`], the zip-with-padding policy.
//! - [`ResponsiveStyles`], the merged output.
//! - [`StyleCalculator`], the seam to the single-value calculator.
//!
//! # Alignment
//! The axis array decides the number of breakpoints. A shorter spacing
//! array repeats its last value; a longer one is cut off. An empty
//! `leading` array keeps `line-height: normal` everywhere, while empty
//! `capHeight`, `fontSize` or `lineGap` arrays are rejected.

pub mod broadcast;
pub mod broadcaster;
pub mod calculator;
pub mod error;
pub mod merge;
pub mod options;

pub use broadcast::{Alignment, Broadcast, broadcast};
pub use broadcaster::{Broadcaster, responsive_capsize, validate};
pub use calculator::{Capsize, StyleCalculator};
pub use error::{Field, OptionsError, ResponsiveError, ValidationError};
pub use merge::{ResponsiveAfter, ResponsiveBefore, ResponsiveStyles};
pub use options::ResponsiveOptions;

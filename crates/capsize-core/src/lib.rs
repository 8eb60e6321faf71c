#![forbid(unsafe_code)]

//! Cap-height based text sizing from font metrics.
//!
//! # Role in capsize-rs
//! `capsize-core` is the single-value calculator. Given a font's vertical
//! metrics and one requested size, it produces the `font-size`,
//! `line-height` and the `::before`/`::after` trims that make an element's
//! box start exactly at the cap height and end exactly at the baseline.
//!
//! # This crate provides
//! - [`FontMetrics`] for the typeface geometry.
//! - [`CapsizeOptions`] with [`Size`] and [`LineSpacing`] for one request.
//! - [`create_style_object`], [`precompute_values`] and [`get_cap_height`].
//! - [`Px`], [`Em`] and [`LineHeight`] CSS values.
//!
//! # How it fits in the system
//! `capsize-responsive` calls [`create_style_object`] once per breakpoint
//! and merges the results; the `capsize` facade re-exports both.

pub mod calculate;
pub mod error;
pub mod metrics;
pub mod options;
pub mod styles;
pub mod values;

pub use calculate::{ComputedValues, create_style_object, get_cap_height, precompute_values};
pub use error::CapsizeError;
pub use metrics::FontMetrics;
pub use options::{CapsizeOptions, LineSpacing, Size};
pub use styles::{AfterStyles, BeforeStyles, CapsizeStyles, PSEUDO_CONTENT, PSEUDO_DISPLAY};
pub use values::{Em, LineHeight, Px};

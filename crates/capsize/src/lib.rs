#![forbid(unsafe_code)]

//! capsize-rs public facade crate.
//!
//! Re-exports the calculator and the responsive broadcaster and adds one
//! error type covering both, so applications can use `?` across them.
//!
//! ```
//! use capsize::prelude::*;
//!
//! let metrics = FontMetrics::new(1456.0, 1900.0, -500.0, 0.0, 2048.0);
//!
//! let heading = capsize::create_style_object(&CapsizeOptions::cap_height(48.0, metrics).line_gap(24.0))?;
//! let body = capsize::responsive_capsize(&ResponsiveOptions::font_size_with_leading(
//!     [16.0, 18.0],
//!     [24.0, 28.0],
//!     metrics,
//! ))?;
//!
//! assert_eq!(heading.line_height.to_string(), "72px");
//! assert_eq!(body.len(), 2);
//! # Ok::<(), capsize::Error>(())
//! ```

use thiserror::Error;

// --- Calculator re-exports -------------------------------------------------

pub use capsize_core::{
    AfterStyles, BeforeStyles, CapsizeError, CapsizeOptions, CapsizeStyles, ComputedValues, Em,
    FontMetrics, LineHeight, LineSpacing, Px, Size, create_style_object, get_cap_height,
    precompute_values,
};

// --- Responsive re-exports -------------------------------------------------

pub use capsize_responsive::{
    Alignment, Broadcaster, Capsize, Field, OptionsError, ResponsiveError, ResponsiveOptions,
    ResponsiveStyles, StyleCalculator, ValidationError, broadcast,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error for capsize-rs callers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The calculator rejected metrics or a size.
    #[error(transparent)]
    Calculator(#[from] CapsizeError),
    /// An input array was empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Configuration named the wrong combination of options.
    #[error(transparent)]
    Options(#[from] OptionsError),
}

impl From<ResponsiveError<CapsizeError>> for Error {
    fn from(err: ResponsiveError<CapsizeError>) -> Self {
        match err {
            ResponsiveError::Validation(err) => Self::Validation(err),
            ResponsiveError::Calculator(err) => Self::Calculator(err),
        }
    }
}

/// Standard result type for capsize-rs APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Responsive styles with the bundled calculator.
pub fn responsive_capsize(options: &ResponsiveOptions) -> Result<ResponsiveStyles> {
    Ok(capsize_responsive::responsive_capsize(options)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Alignment, Broadcaster, CapsizeOptions, CapsizeStyles, Error, FontMetrics, LineHeight,
        LineSpacing, ResponsiveOptions, ResponsiveStyles, Result, Size,
    };

    pub use crate::{core, responsive};
}

pub use capsize_core as core;
pub use capsize_responsive as responsive;

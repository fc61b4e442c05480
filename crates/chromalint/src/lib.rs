//! # Chromalint
//!
//! Chromalint checks colors for legibility and distinctness. It parses colors
//! in the usual CSS notations, measures WCAG contrast between text and
//! background, computes perceptual color differences with CIE76, CIE94, and
//! CIEDE2000, and validates entire palettes for colors that are too similar.
//! When colors fall short, it recommends replacements.
//!
//!
//! ## 1. Overview
//!
//! Chromalint's main abstractions are:
//!
//!   * [`Rgb`] is the canonical **24-bit sRGB color**. All parsing converges
//!     on it and all analysis starts from it. [`Hsl`] and [`Lab`] are derived
//!     representations for adjusting colors in human-friendly steps and for
//!     measuring perceptual differences, respectively. [`Degrees`] and
//!     [`Turns`] keep the two units for hues apart.
//!   * [`parse_color`] accepts hashed hexadecimal colors with three or six
//!     digits, the `rgb()`, `rgba()`, `hsl()`, and `hsla()` functions, as well
//!     as 148 **CSS color names**. It returns `None` for anything else. For a
//!     reason, use [`Rgb::from_str`](std::str::FromStr::from_str), which
//!     returns a [`ColorFormatError`](error::ColorFormatError).
//!   * [`DeltaE`] selects a **color difference** algorithm and
//!     [`DifferenceCategory`] names the perceptual significance of a
//!     difference.
//!   * [`wcag::WcagLevel`] captures the WCAG **contrast requirements** and
//!     [`adjust_contrast`] moves a color towards a required contrast ratio.
//!   * The [`validate`] module combines the above into the two validators
//!     [`test_contrast`] and [`validate_color_distinction`]. Their results
//!     serialize to JSON with serde.
//!
//!
//! ## 2. Examples
//!
//! Check text contrast and pick up the recommended fix:
//!
//! ```
//! # use chromalint::{test_contrast, ContrastOptions};
//! let result = test_contrast("#777", "#fff", &ContrastOptions::default());
//! assert!(!result.valid);
//! assert!(result.contrast_ratio < 4.5);
//!
//! let fix = result.recommendation.unwrap();
//! assert_eq!(fix.hex, "#6a6a6a");
//! assert!(fix.contrast_ratio >= 4.5);
//! ```
//!
//! Compare two colors:
//!
//! ```
//! # use chromalint::{DeltaE, DifferenceCategory, Rgb};
//! # use chromalint::error::ColorFormatError;
//! let blue: Rgb = "#1f77b4".parse()?;
//! let orange: Rgb = "rgb(255, 127, 14)".parse()?;
//!
//! let distance = DeltaE::Ciede2000.distance_rgb(&blue, &orange);
//! assert_eq!(DifferenceCategory::classify(distance), DifferenceCategory::VeryDifferent);
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//!
//! ## 3. Logging
//!
//! Chromalint logs through [tracing](https://docs.rs/tracing). It records
//! rejected color strings and validator outcomes at debug level, adjustment
//! steps at trace level, and fallbacks for unknown algorithm names at warn
//! level. It never installs a subscriber.

mod adjust;
mod core;
pub mod error;
mod object;
pub mod validate;
pub mod wcag;

pub use adjust::{adjust_contrast, Adjustment, MAX_ITERATIONS};
pub use core::{
    close_enough, contrast_ratio, delta_e_cie76, delta_e_cie94, delta_e_ciede2000, hsl_to_rgb,
    named_color, parse_color, relative_luminance, rgb_to_hsl, rgb_to_lab, DeltaE,
    DifferenceCategory, DEFAULT_TOLERANCE, D65,
};
pub use object::{Degrees, Hsl, Lab, Rgb, Turns};
pub use validate::{
    test_contrast, validate_color_distinction, ContrastOptions, ContrastResult,
    DistinctionOptions, DistinctionResult,
};

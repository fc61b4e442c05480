//! Validation of color combinations for legibility and distinctness.
//!
//! This module provides two validators. [`test_contrast`] checks a
//! foreground and background color against a WCAG contrast requirement and,
//! if necessary, recommends an adjusted color. [`validate_color_distinction`]
//! checks that a palette's colors are perceptually distinct, groups colors
//! that are not, and suggests replacements.
//!
//! Both validators accept colors as text and never fail. Instead, their
//! results report invalid input through an `error` field. Both results
//! serialize with camelCase field names, and both option structs deserialize
//! from partial descriptions, with missing fields taking on their defaults.
//!
//!
//! # Examples
//!
//! ```
//! # use chromalint::validate::{test_contrast, ContrastOptions};
//! # use chromalint::wcag::WcagLevel;
//! let options = ContrastOptions::default().with_wcag_level(WcagLevel::Aaa);
//! let result = test_contrast("steelblue", "white", &options);
//! assert!(!result.valid);
//! assert_eq!(result.achieved_level, Some(WcagLevel::A));
//! assert!(result.recommendation.is_some());
//! ```
//!
//! ```
//! # use chromalint::validate::{validate_color_distinction, DistinctionOptions};
//! let result = validate_color_distinction(
//!     &["red", "#fe0101", "lime", "notacolor"],
//!     &DistinctionOptions::default(),
//! );
//! assert!(!result.valid);
//! assert_eq!(result.invalid_colors, vec!["notacolor".to_string()]);
//! assert_eq!(result.color_pairs.len(), 3);
//! ```

mod contrast;
mod distinction;
mod graph;

pub use contrast::{
    test_contrast, AdjustmentTarget, ContrastOptions, ContrastRecommendation, ContrastResult,
};
pub use distinction::{
    validate_color_distinction, ColorPair, ColorRecommendation, DistinctionOptions,
    DistinctionResult,
};
pub use graph::SimilarityGraph;

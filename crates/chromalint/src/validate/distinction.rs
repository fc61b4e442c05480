use serde::{Deserialize, Serialize};

use super::graph::SimilarityGraph;
use crate::core::{parse_color, DeltaE};
use crate::error::AnalysisError;
use crate::object::{Hsl, Lab, Rgb};

/// The options for [`validate_color_distinction`].
///
/// Missing fields take on their defaults when deserializing. Unknown
/// algorithm names are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DistinctionOptions {
    /// The smallest acceptable distance between two colors, 20 by default.
    pub minimum_distance: f64,
    /// The color difference algorithm, CIEDE2000 by default.
    pub algorithm: DeltaE,
    /// Whether to report groups of similar colors.
    pub group_similar_colors: bool,
    /// Whether to suggest replacements for similar colors.
    pub include_recommendations: bool,
}

impl Default for DistinctionOptions {
    fn default() -> Self {
        Self {
            minimum_distance: 20.0,
            algorithm: DeltaE::Ciede2000,
            group_similar_colors: true,
            include_recommendations: true,
        }
    }
}

impl DistinctionOptions {
    /// Update the minimum distance.
    #[must_use]
    pub const fn with_minimum_distance(mut self, minimum_distance: f64) -> Self {
        self.minimum_distance = minimum_distance;
        self
    }

    /// Update the algorithm.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: DeltaE) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Update the grouping flag.
    #[must_use]
    pub const fn with_grouping(mut self, group_similar_colors: bool) -> Self {
        self.group_similar_colors = group_similar_colors;
        self
    }

    /// Update the recommendations flag.
    #[must_use]
    pub const fn with_recommendations(mut self, include_recommendations: bool) -> Self {
        self.include_recommendations = include_recommendations;
        self
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Two colors and their distance.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPair {
    pub color1: String,
    pub color2: String,
    pub distance: f64,
    /// Whether the distance meets the minimum.
    pub sufficient: bool,
}

/// A suggested replacement for one color of a group of similar colors.
///
/// The suggestion results from a fixed shift in HSL and is not checked
/// against the other colors. It may well be too close to some of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorRecommendation {
    /// The color to replace, as given.
    pub original: String,
    /// The replacement as hashed hexadecimal.
    pub suggestion: String,
    /// The number of colors in the group that the original is too close to.
    pub conflicts: usize,
}

/// The result of [`validate_color_distinction`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistinctionResult {
    /// Whether all pairs of valid colors are sufficiently distinct.
    pub valid: bool,
    pub algorithm: DeltaE,
    /// The configured minimum distance.
    pub minimum_distance: f64,
    /// The smallest distance between any two valid colors.
    pub smallest_distance: Option<f64>,
    /// All unordered pairs of valid colors, in input order.
    pub color_pairs: Vec<ColorPair>,
    pub insufficient_pairs: Vec<ColorPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similar_groups: Option<Vec<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<ColorRecommendation>>,
    /// The inputs that are not colors.
    pub invalid_colors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// --------------------------------------------------------------------------------------------------------------------

/// Shift the color to a hopefully more distinct one.
///
/// This function rotates the hue by 30°, boosts a saturation below 50% by 20
/// points, and moves a lightness outside 30–70% by up to 20 points towards
/// that band.
fn shift(color: &Rgb) -> Rgb {
    let Hsl { h, s, l } = color.to_hsl();

    let s = if s < 50.0 { (s + 20.0).min(100.0) } else { s };
    let l = if l < 30.0 {
        (l + 20.0).min(30.0)
    } else if 70.0 < l {
        (l - 20.0).max(70.0)
    } else {
        l
    };

    Hsl::new(h.rotate(30.0).value(), s, l).to_rgb()
}

/// Validate that the colors are perceptually distinct from each other.
///
/// This function parses all colors, skipping and reporting invalid ones. It
/// then computes the distance between every pair of valid colors with the
/// configured algorithm and flags pairs closer than the minimum distance.
/// Those pairs are the edges of a graph whose connected components are the
/// groups of similar colors. For every group, the recommendations suggest a
/// replacement for the color with the most conflicts, picking the earliest
/// such color. If fewer than two colors are valid, the result is invalid and
/// carries an error message.
///
/// ```
/// # use chromalint::{validate_color_distinction, DistinctionOptions};
/// let options = DistinctionOptions::default().with_minimum_distance(25.0);
/// let result = validate_color_distinction(&["#1f77b4", "#1f78b5", "#ff7f0e"], &options);
/// assert!(!result.valid);
/// assert_eq!(result.color_pairs.len(), 3);
/// assert_eq!(result.insufficient_pairs.len(), 1);
/// assert_eq!(
///     result.similar_groups,
///     Some(vec![vec!["#1f77b4".to_string(), "#1f78b5".to_string()]])
/// );
/// ```
pub fn validate_color_distinction<S: AsRef<str>>(
    colors: &[S],
    options: &DistinctionOptions,
) -> DistinctionResult {
    let mut valid_colors: Vec<(&str, Rgb, Lab)> = Vec::with_capacity(colors.len());
    let mut invalid_colors = Vec::new();

    for text in colors {
        let text = text.as_ref();
        let Some(color) = parse_color(text) else {
            invalid_colors.push(text.to_owned());
            continue;
        };
        valid_colors.push((text, color, color.to_lab()));
    }

    let mut result = DistinctionResult {
        valid: false,
        algorithm: options.algorithm,
        minimum_distance: options.minimum_distance,
        smallest_distance: None,
        color_pairs: Vec::new(),
        insufficient_pairs: Vec::new(),
        similar_groups: None,
        recommendations: None,
        invalid_colors,
        error: None,
    };

    if valid_colors.len() < 2 {
        let error = AnalysisError::TooFewColors(valid_colors.len());
        tracing::debug!(
            invalid = ?result.invalid_colors,
            %error,
            "cannot validate color distinction"
        );
        result.error = Some(error.to_string());
        return result;
    }

    let mut graph = SimilarityGraph::new(valid_colors.len());
    for (index1, &(text1, _, lab1)) in valid_colors.iter().enumerate() {
        for (index2, &(text2, _, lab2)) in valid_colors.iter().enumerate().skip(index1 + 1) {
            let distance = options.algorithm.distance(&lab1, &lab2);
            let sufficient = distance >= options.minimum_distance;
            let pair = ColorPair {
                color1: text1.to_owned(),
                color2: text2.to_owned(),
                distance,
                sufficient,
            };

            if !sufficient {
                graph.add_edge(index1, index2);
                result.insufficient_pairs.push(pair.clone());
            }
            result.color_pairs.push(pair);
        }
    }

    result.smallest_distance = result
        .color_pairs
        .iter()
        .map(|pair| pair.distance)
        .reduce(f64::min);
    result.valid = result.insufficient_pairs.is_empty();

    let wants_groups = options.group_similar_colors || options.include_recommendations;
    if !result.valid && wants_groups {
        let components = graph.connected_components();

        if options.group_similar_colors {
            result.similar_groups = Some(
                components
                    .iter()
                    .map(|component| {
                        component
                            .iter()
                            .map(|&index| valid_colors[index].0.to_owned())
                            .collect()
                    })
                    .collect(),
            );
        }

        if options.include_recommendations {
            result.recommendations = Some(
                components
                    .iter()
                    .filter_map(|component| {
                        // Iterating in reverse makes max_by_key pick the earliest color.
                        let &index = component
                            .iter()
                            .rev()
                            .max_by_key(|&&index| graph.degree(index))?;
                        let (text, color, _) = valid_colors[index];
                        Some(ColorRecommendation {
                            original: text.to_owned(),
                            suggestion: shift(&color).to_hex(),
                            conflicts: graph.degree(index),
                        })
                    })
                    .collect(),
            );
        }
    }

    tracing::debug!(
        colors = valid_colors.len(),
        invalid = result.invalid_colors.len(),
        insufficient = result.insufficient_pairs.len(),
        smallest_distance = ?result.smallest_distance,
        valid = result.valid,
        "validated color distinction"
    );

    result
}

// ====================================================================================================================

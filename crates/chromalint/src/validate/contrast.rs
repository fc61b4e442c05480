use serde::{Deserialize, Serialize};

use crate::adjust::{adjust_contrast, Adjustment};
use crate::core::{parse_color, DeltaE};
use crate::error::AnalysisError;
use crate::object::Rgb;
use crate::wcag::WcagLevel;

/// The options for [`test_contrast`].
///
/// Missing fields take on their defaults when deserializing, so `{}` is a
/// valid configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContrastOptions {
    /// The WCAG level to check against, AA by default.
    pub wcag_level: WcagLevel,
    /// Whether the text is large, which relaxes requirements.
    pub large_text: bool,
    /// Whether to recommend a fix for insufficient contrast.
    pub include_recommendations: bool,
}

impl Default for ContrastOptions {
    fn default() -> Self {
        Self {
            wcag_level: WcagLevel::Aa,
            large_text: false,
            include_recommendations: true,
        }
    }
}

impl ContrastOptions {
    /// Update the WCAG level.
    #[must_use]
    pub const fn with_wcag_level(mut self, wcag_level: WcagLevel) -> Self {
        self.wcag_level = wcag_level;
        self
    }

    /// Update the large text flag.
    #[must_use]
    pub const fn with_large_text(mut self, large_text: bool) -> Self {
        self.large_text = large_text;
        self
    }

    /// Update the recommendations flag.
    #[must_use]
    pub const fn with_recommendations(mut self, include_recommendations: bool) -> Self {
        self.include_recommendations = include_recommendations;
        self
    }

    /// Get the contrast ratio required by these options.
    pub const fn required_ratio(&self) -> f64 {
        self.wcag_level.required_ratio(self.large_text)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The color that a [`ContrastRecommendation`] replaces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentTarget {
    Foreground,
    Background,
}

/// A suggested replacement for one of the two colors of an insufficient
/// contrast.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastRecommendation {
    /// The color being replaced.
    pub target: AdjustmentTarget,
    /// The replacement color.
    pub color: Rgb,
    /// The replacement color as hashed hexadecimal.
    pub hex: String,
    /// The contrast ratio with the replacement color.
    pub contrast_ratio: f64,
    /// The CIEDE2000 distance between the original and replacement colors.
    pub distance: f64,
    /// Whether the contrast ratio meets the requirement.
    pub converged: bool,
}

impl ContrastRecommendation {
    fn new(target: AdjustmentTarget, original: &Rgb, adjustment: &Adjustment) -> Self {
        Self {
            target,
            color: adjustment.color,
            hex: adjustment.color.to_hex(),
            contrast_ratio: adjustment.contrast_ratio,
            distance: DeltaE::Ciede2000.distance_rgb(original, &adjustment.color),
            converged: adjustment.converged,
        }
    }

    /// Pick the better of the two recommendations.
    ///
    /// A recommendation that meets the requirement beats one that does not.
    /// Between two that do, the one closer to its original color wins. Between
    /// two that do not, the one with higher contrast wins, falling back on
    /// distance. Remaining ties favor the foreground.
    fn choose(foreground: Self, background: Self) -> Self {
        let prefer_background = match (foreground.converged, background.converged) {
            (false, true) => true,
            (true, false) => false,
            (true, true) => background.distance < foreground.distance,
            (false, false) => {
                background.contrast_ratio > foreground.contrast_ratio
                    || (background.contrast_ratio == foreground.contrast_ratio
                        && background.distance < foreground.distance)
            }
        };

        if prefer_background {
            background
        } else {
            foreground
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The result of [`test_contrast`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// Whether the contrast ratio meets the requirement.
    pub valid: bool,
    /// The contrast ratio, which is zero if either color is invalid.
    pub contrast_ratio: f64,
    /// The required contrast ratio.
    pub required_ratio: f64,
    /// The WCAG level checked against.
    pub wcag_level: WcagLevel,
    /// Whether the text is large.
    pub large_text: bool,
    /// The foreground color as given.
    pub foreground_color: String,
    /// The background color as given.
    pub background_color: String,
    /// The strongest WCAG level met by the contrast ratio.
    pub achieved_level: Option<WcagLevel>,
    /// The reason for failing to compute a contrast ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The suggested fix for insufficient contrast.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<ContrastRecommendation>,
}

impl ContrastResult {
    fn failure(
        foreground: &str,
        background: &str,
        options: &ContrastOptions,
        error: &AnalysisError,
    ) -> Self {
        tracing::debug!(foreground, background, %error, "cannot test contrast");
        Self {
            valid: false,
            contrast_ratio: 0.0,
            required_ratio: options.required_ratio(),
            wcag_level: options.wcag_level,
            large_text: options.large_text,
            foreground_color: foreground.to_owned(),
            background_color: background.to_owned(),
            achieved_level: None,
            error: Some(error.to_string()),
            recommendation: None,
        }
    }
}

/// Test whether the foreground and background colors have sufficient
/// contrast.
///
/// If either color fails to parse, the result is invalid, has a contrast
/// ratio of zero, and carries an error message. The foreground is checked
/// first. If the contrast is insufficient and the options ask for
/// recommendations, this function adjusts both foreground and background
/// and recommends the more suitable of the two adjustments.
///
/// ```
/// # use chromalint::{test_contrast, ContrastOptions};
/// let result = test_contrast("#000", "white", &ContrastOptions::default());
/// assert!(result.valid);
/// assert_eq!(result.contrast_ratio, 21.0);
/// assert!(result.recommendation.is_none());
///
/// let result = test_contrast("#777777", "#ffffff", &ContrastOptions::default());
/// assert!(!result.valid);
/// let recommendation = result.recommendation.unwrap();
/// assert!(recommendation.contrast_ratio >= 4.5);
/// ```
pub fn test_contrast(foreground: &str, background: &str, options: &ContrastOptions) -> ContrastResult {
    let Some(fg) = parse_color(foreground) else {
        return ContrastResult::failure(
            foreground,
            background,
            options,
            &AnalysisError::InvalidForeground,
        );
    };
    let Some(bg) = parse_color(background) else {
        return ContrastResult::failure(
            foreground,
            background,
            options,
            &AnalysisError::InvalidBackground,
        );
    };

    let contrast_ratio = fg.contrast_ratio(&bg);
    let required_ratio = options.required_ratio();
    let valid = contrast_ratio >= required_ratio;

    let recommendation = (!valid && options.include_recommendations).then(|| {
        let fg_adjustment = adjust_contrast(&fg, &bg, required_ratio);
        let bg_adjustment = adjust_contrast(&bg, &fg, required_ratio);

        ContrastRecommendation::choose(
            ContrastRecommendation::new(AdjustmentTarget::Foreground, &fg, &fg_adjustment),
            ContrastRecommendation::new(AdjustmentTarget::Background, &bg, &bg_adjustment),
        )
    });

    tracing::debug!(
        foreground,
        background,
        contrast_ratio,
        required_ratio,
        valid,
        "tested contrast"
    );

    ContrastResult {
        valid,
        contrast_ratio,
        required_ratio,
        wcag_level: options.wcag_level,
        large_text: options.large_text,
        foreground_color: foreground.to_owned(),
        background_color: background.to_owned(),
        achieved_level: WcagLevel::highest_passing(contrast_ratio, options.large_text),
        error: None,
        recommendation,
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{test_contrast, AdjustmentTarget, ContrastOptions, ContrastRecommendation};
    use crate::assert_close_enough;
    use crate::object::Rgb;
    use crate::wcag::WcagLevel;

    #[test]
    fn test_black_on_white() {
        let result = test_contrast("#000000", "#FFFFFF", &ContrastOptions::default());
        assert!(result.valid);
        assert_close_enough!(result.contrast_ratio, 21.0);
        assert_eq!(result.required_ratio, 4.5);
        assert_eq!(result.wcag_level, WcagLevel::Aa);
        assert_eq!(result.achieved_level, Some(WcagLevel::Aaa));
        assert_eq!(result.foreground_color, "#000000");
        assert_eq!(result.background_color, "#FFFFFF");
        assert!(result.error.is_none());
        assert!(result.recommendation.is_none());
    }

    #[test]
    fn test_gray_on_white() {
        let result = test_contrast("#777777", "#FFFFFF", &ContrastOptions::default());
        assert!(!result.valid);
        assert_close_enough!(result.contrast_ratio, 4.478089453577214);
        assert_eq!(result.achieved_level, Some(WcagLevel::A));

        let Some(recommendation) = result.recommendation else {
            panic!("insufficient contrast should come with recommendation");
        };
        assert_eq!(recommendation.target, AdjustmentTarget::Foreground);
        assert_eq!(recommendation.color, Rgb::new(0x6a, 0x6a, 0x6a));
        assert_eq!(recommendation.hex, "#6a6a6a");
        assert!(recommendation.converged);
        assert!(recommendation.contrast_ratio >= 4.5);
        assert_close_enough!(recommendation.distance, 5.116672315088107, 1e-6);
    }

    #[test]
    fn test_without_recommendations() {
        let options = ContrastOptions::default().with_recommendations(false);
        let result = test_contrast("#777777", "#FFFFFF", &options);
        assert!(!result.valid);
        assert!(result.recommendation.is_none());
    }

    #[test]
    fn test_large_text() {
        let options = ContrastOptions::default().with_large_text(true);
        let result = test_contrast("#777777", "#FFFFFF", &options);
        assert!(result.valid);
        assert_eq!(result.required_ratio, 3.0);

        let options = options.with_wcag_level(WcagLevel::Aaa);
        let result = test_contrast("#777777", "#FFFFFF", &options);
        assert!(!result.valid);
        assert_eq!(result.required_ratio, 4.5);
    }

    #[test]
    fn test_invalid_colors() {
        let options = ContrastOptions::default();

        let result = test_contrast("notacolor", "#FFFFFF", &options);
        assert!(!result.valid);
        assert_eq!(result.contrast_ratio, 0.0);
        assert_eq!(result.error.as_deref(), Some("Invalid foreground color"));
        assert!(result.recommendation.is_none());

        let result = test_contrast("#FFFFFF", "#12", &options);
        assert_eq!(result.error.as_deref(), Some("Invalid background color"));

        let result = test_contrast("", "", &options);
        assert_eq!(result.error.as_deref(), Some("Invalid foreground color"));
    }

    #[test]
    fn test_choice() {
        let candidate = |target, distance, contrast_ratio, converged| ContrastRecommendation {
            target,
            color: Rgb::default(),
            hex: "#000000".to_owned(),
            contrast_ratio,
            distance,
            converged,
        };
        let fg = AdjustmentTarget::Foreground;
        let bg = AdjustmentTarget::Background;

        let choice = ContrastRecommendation::choose(
            candidate(fg, 5.0, 5.0, true),
            candidate(bg, 0.0, 4.0, false),
        );
        assert_eq!(choice.target, fg);

        let choice = ContrastRecommendation::choose(
            candidate(fg, 5.0, 5.0, true),
            candidate(bg, 3.0, 4.6, true),
        );
        assert_eq!(choice.target, bg);

        let choice = ContrastRecommendation::choose(
            candidate(fg, 3.0, 5.0, true),
            candidate(bg, 3.0, 4.6, true),
        );
        assert_eq!(choice.target, fg);

        let choice = ContrastRecommendation::choose(
            candidate(fg, 1.0, 3.0, false),
            candidate(bg, 9.0, 3.5, false),
        );
        assert_eq!(choice.target, bg);
    }

    #[test]
    fn test_options() -> Result<(), serde_json::Error> {
        let options: ContrastOptions = serde_json::from_str("{}")?;
        assert_eq!(options, ContrastOptions::default());

        let options: ContrastOptions =
            serde_json::from_str(r#"{"wcagLevel": "AAA", "largeText": true}"#)?;
        assert_eq!(options.wcag_level, WcagLevel::Aaa);
        assert!(options.large_text);
        assert!(options.include_recommendations);
        assert!(serde_json::from_str::<ContrastOptions>(r#"{"wcagLevel": "B"}"#).is_err());
        Ok(())
    }

    #[test]
    fn test_serialize() -> Result<(), serde_json::Error> {
        let result = test_contrast("#000", "#fff", &ContrastOptions::default());
        let json = serde_json::to_value(&result)?;
        assert_eq!(json["valid"], true);
        assert_eq!(json["contrastRatio"], 21.0);
        assert_eq!(json["wcagLevel"], "AA");
        assert_eq!(json["achievedLevel"], "AAA");
        assert!(json.get("error").is_none());
        assert!(json.get("recommendation").is_none());

        let result = test_contrast("#777777", "#fff", &ContrastOptions::default());
        let json = serde_json::to_value(&result)?;
        assert_eq!(json["recommendation"]["target"], "foreground");
        assert_eq!(json["recommendation"]["hex"], "#6a6a6a");
        assert_eq!(json["recommendation"]["color"]["r"], 0x6a);
        Ok(())
    }
}

//! Iterative adjustment of colors towards a target contrast ratio.

use serde::Serialize;

use crate::object::Rgb;

/// The maximum number of adjustment steps.
pub const MAX_ITERATIONS: usize = 20;

/// The lightness change per step, in percent.
const LIGHTNESS_STEP: f64 = 5.0;

/// The saturation change per step, in percent.
const SATURATION_STEP: f64 = 10.0;

/// Lightening stops at this lightness, darkening at 100 minus it.
const LIGHTNESS_LIMIT: f64 = 95.0;

/// The luminance at which contrast against black equals contrast against
/// white, i.e., √(1.05 × 0.05) − 0.05.
const MIDPOINT_LUMINANCE: f64 = 0.179_128_784_747_792;

/// The outcome of [`adjust_contrast`].
///
/// Adjustment is best effort. The color is the closest match found within the
/// step budget, and `converged` tells whether it actually meets the target.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    /// The adjusted color.
    pub color: Rgb,
    /// The contrast ratio between the adjusted color and the background.
    pub contrast_ratio: f64,
    /// Whether the contrast ratio meets the target.
    pub converged: bool,
    /// The number of steps taken.
    pub iterations: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Direction {
    Lighten,
    Darken,
}

impl Direction {
    /// Pick the direction that moves the color away from the background.
    fn away_from(color: &Rgb, background: &Rgb) -> Self {
        let color_luminance = color.relative_luminance();
        let background_luminance = background.relative_luminance();

        if color_luminance < background_luminance {
            Self::Darken
        } else if background_luminance < color_luminance {
            Self::Lighten
        } else if background_luminance < MIDPOINT_LUMINANCE {
            Self::Lighten
        } else {
            Self::Darken
        }
    }

    const fn lightness_step(&self) -> f64 {
        match *self {
            Self::Lighten => LIGHTNESS_STEP,
            Self::Darken => -LIGHTNESS_STEP,
        }
    }

    fn is_saturated(&self, lightness: f64) -> bool {
        match *self {
            Self::Lighten => lightness >= LIGHTNESS_LIMIT,
            Self::Darken => lightness <= 100.0 - LIGHTNESS_LIMIT,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Lightness,
    Saturation,
}

/// Adjust the color until its contrast against the background meets the
/// target ratio.
///
/// If the color already meets the target, this function returns it
/// unchanged. Otherwise, it moves the color away from the background's
/// luminance in HSL lightness steps of 5%. Once lightness reaches 95% (when
/// lightening) or 5% (when darkening), it switches to reducing saturation in
/// steps of 10%, which moves the color towards gray. The search ends upon
/// meeting the target, after [`MAX_ITERATIONS`] steps, or when a color
/// without saturation still falls short. In the latter two cases, the result
/// holds the color with the highest contrast seen.
///
/// ```
/// # use chromalint::{adjust_contrast, Rgb};
/// let gray = Rgb::new(0x77, 0x77, 0x77);
/// let white = Rgb::new(0xff, 0xff, 0xff);
/// let adjustment = adjust_contrast(&gray, &white, 4.5);
/// assert!(adjustment.converged);
/// assert_eq!(adjustment.color, Rgb::new(0x6a, 0x6a, 0x6a));
/// assert!(adjustment.contrast_ratio >= 4.5);
/// ```
pub fn adjust_contrast(color: &Rgb, background: &Rgb, target_ratio: f64) -> Adjustment {
    let initial_ratio = color.contrast_ratio(background);
    if initial_ratio >= target_ratio {
        return Adjustment {
            color: *color,
            contrast_ratio: initial_ratio,
            converged: true,
            iterations: 0,
        };
    }

    let direction = Direction::away_from(color, background);
    let mut phase = Phase::Lightness;
    let mut current = *color;
    let mut best = (*color, initial_ratio);
    let mut iterations = 0;

    for iteration in 1..=MAX_ITERATIONS {
        let mut hsl = current.to_hsl();

        if phase == Phase::Lightness && direction.is_saturated(hsl.l) {
            phase = Phase::Saturation;
        }

        match phase {
            Phase::Lightness => {
                hsl.l = (hsl.l + direction.lightness_step()).clamp(0.0, 100.0);
            }
            Phase::Saturation => {
                if hsl.s <= 0.0 {
                    tracing::trace!(%color, %background, iteration, "no saturation left");
                    break;
                }
                hsl.s = (hsl.s - SATURATION_STEP).max(0.0);
            }
        }

        iterations = iteration;
        current = hsl.to_rgb();
        let ratio = current.contrast_ratio(background);
        tracing::trace!(%current, ratio, ?phase, ?direction, iteration, "adjusting contrast");

        if ratio >= target_ratio {
            return Adjustment {
                color: current,
                contrast_ratio: ratio,
                converged: true,
                iterations: iteration,
            };
        } else if ratio > best.1 {
            best = (current, ratio);
        }
    }

    let (color, contrast_ratio) = best;
    Adjustment {
        color,
        contrast_ratio,
        converged: false,
        iterations,
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{adjust_contrast, Direction, MAX_ITERATIONS};
    use crate::object::Rgb;
    use crate::wcag::WcagLevel;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    const BLACK: Rgb = Rgb::new(0, 0, 0);
    const GRAY: Rgb = Rgb::new(0x77, 0x77, 0x77);

    #[test]
    fn test_already_sufficient() {
        let adjustment = adjust_contrast(&BLACK, &WHITE, 7.0);
        assert!(adjustment.converged);
        assert_eq!(adjustment.color, BLACK);
        assert_eq!(adjustment.iterations, 0);
        assert_eq!(adjustment.contrast_ratio, 21.0);
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::away_from(&GRAY, &WHITE), Direction::Darken);
        assert_eq!(Direction::away_from(&GRAY, &BLACK), Direction::Lighten);
        assert_eq!(Direction::away_from(&BLACK, &BLACK), Direction::Lighten);
        assert_eq!(Direction::away_from(&WHITE, &WHITE), Direction::Darken);
    }

    #[test]
    fn test_darken_gray() {
        let adjustment = adjust_contrast(&GRAY, &WHITE, 4.5);
        assert!(adjustment.converged);
        assert_eq!(adjustment.color, Rgb::new(0x6a, 0x6a, 0x6a));
        assert_eq!(adjustment.iterations, 1);
        assert!(adjustment.contrast_ratio >= 4.5);
        assert_eq!(adjustment.contrast_ratio, adjustment.color.contrast_ratio(&WHITE));
    }

    #[test]
    fn test_lighten_on_black() {
        let adjustment = adjust_contrast(&Rgb::new(0x33, 0x33, 0x33), &BLACK, 7.0);
        assert!(adjustment.converged);
        assert!(adjustment.contrast_ratio >= 7.0);
        assert!(adjustment.color.relative_luminance() > 0.3);
    }

    #[test]
    fn test_not_converged() {
        // White cannot get any lighter than white.
        let adjustment = adjust_contrast(&WHITE, &GRAY, 7.0);
        assert!(!adjustment.converged);
        assert_eq!(adjustment.color, WHITE);
        assert!(adjustment.contrast_ratio < 7.0);
        assert!(adjustment.iterations <= MAX_ITERATIONS);
    }

    #[test]
    fn test_random_adjustments() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let color = Rgb::new(rng.random(), rng.random(), rng.random());
            let background = Rgb::new(rng.random(), rng.random(), rng.random());
            let target = WcagLevel::Aa.required_ratio(false);
            let adjustment = adjust_contrast(&color, &background, target);

            assert!(adjustment.iterations <= MAX_ITERATIONS);
            assert_eq!(adjustment.converged, adjustment.contrast_ratio >= target);
            assert!(adjustment.contrast_ratio >= color.contrast_ratio(&background));
            assert_eq!(
                adjustment.contrast_ratio,
                adjustment.color.contrast_ratio(&background)
            );
        }
    }
}

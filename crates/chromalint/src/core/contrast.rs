use super::conversion::srgb_to_linear;
use crate::object::Rgb;

/// The coefficients for computing relative luminance from linear sRGB
/// coordinates, as fixed by WCAG 2.
const SRGB_LUMINANCE: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// The flare added to both luminance values of the contrast ratio.
const FLARE: f64 = 0.05;

/// Compute the relative luminance of the given sRGB color.
///
/// This function gamma-decodes the channels exactly as
/// [`rgb_to_lab`](crate::rgb_to_lab) does and then takes the weighted sum
/// with WCAG's coefficients. The result ranges from 0 for black to 1 for
/// white.
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    let [c1, c2, c3] = SRGB_LUMINANCE;
    c1 * srgb_to_linear(r) + c2 * srgb_to_linear(g) + c3 * srgb_to_linear(b)
}

/// Compute the WCAG contrast ratio between the two colors.
///
/// The ratio divides the lighter luminance by the darker one, after adding
/// 0.05 to both. Hence it is symmetric and ranges `1.0..=21.0`.
pub fn contrast_ratio(color1: &Rgb, color2: &Rgb) -> f64 {
    let l1 = relative_luminance(color1.r, color1.g, color1.b);
    let l2 = relative_luminance(color2.r, color2.g, color2.b);
    (l1.max(l2) + FLARE) / (l1.min(l2) + FLARE)
}

#[cfg(test)]
mod test {
    use super::{contrast_ratio, relative_luminance};
    use crate::assert_close_enough;
    use crate::object::Rgb;

    #[test]
    fn test_luminance() {
        assert_close_enough!(relative_luminance(0, 0, 0), 0.0);
        assert_close_enough!(relative_luminance(255, 255, 255), 1.0);
        assert_close_enough!(relative_luminance(255, 0, 0), 0.2126);
        assert_close_enough!(relative_luminance(0, 255, 0), 0.7152);
        assert_close_enough!(relative_luminance(0, 0, 255), 0.0722);
    }

    #[test]
    fn test_contrast_ratio() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        let gray = Rgb::new(0x77, 0x77, 0x77);

        assert_close_enough!(contrast_ratio(&black, &white), 21.0);
        assert_close_enough!(contrast_ratio(&white, &white), 1.0);
        assert_close_enough!(contrast_ratio(&gray, &white), 4.478089453577214, 1e-9);
        assert_close_enough!(
            contrast_ratio(&Rgb::new(0x76, 0x76, 0x76), &white),
            4.54,
            0.01
        );
    }

    #[test]
    fn test_symmetry_and_bound() {
        use rand::{Rng, SeedableRng};

        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let c1 = Rgb::new(rng.random(), rng.random(), rng.random());
            let c2 = Rgb::new(rng.random(), rng.random(), rng.random());
            let ratio = contrast_ratio(&c1, &c2);

            assert_eq!(ratio, contrast_ratio(&c2, &c1));
            assert!(ratio >= 1.0, "ratio {} for {} and {}", ratio, c1, c2);
            assert!(ratio <= 21.0 + 1e-9, "ratio {} for {} and {}", ratio, c1, c2);
            assert_eq!(contrast_ratio(&c1, &c1), 1.0);
        }
    }
}

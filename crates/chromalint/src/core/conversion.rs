use crate::object::{Hsl, Lab, Rgb, Turns};

/// Convert a unit-range coordinate to an 8-bit channel.
///
/// The coordinate is clamped to `0..=1` before scaling and rounding.
/// Not-a-number becomes zero.
#[inline]
pub(crate) fn to_8bit(value: f64) -> u8 {
    if value.is_nan() {
        0
    } else {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// Convert an 8-bit sRGB channel to linear light.
///
/// The gamma decoding uses 0.04045 as threshold between the linear segment
/// with divisor 12.92 and the power segment with exponent 2.4. Both the
/// relative luminance and the L*a*b* conversion rely on this function.
#[inline]
pub(crate) fn srgb_to_linear(channel: u8) -> f64 {
    let value = channel as f64 / 255.0;
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert an sRGB color to HSL.
///
/// The hue of the result is in degrees, its saturation and lightness are
/// percentages. Grays have zero hue and saturation.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, lightness * 100.0);
    }

    let delta = max - min;
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let sextant = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new(sextant * 60.0, saturation * 100.0, lightness * 100.0)
}

/// Convert an HSL color to sRGB.
///
/// Unlike [`rgb_to_hsl`], this function takes the hue as fraction of a turn
/// and saturation as well as lightness as fractions in `0..=1`. Out-of-range
/// saturation and lightness are clamped.
pub fn hsl_to_rgb(h: Turns, s: f64, l: f64) -> Rgb {
    let s = if s.is_nan() { 0.0 } else { s.clamp(0.0, 1.0) };
    let l = if l.is_nan() { 0.0 } else { l.clamp(0.0, 1.0) };

    if s == 0.0 {
        let v = to_8bit(l);
        return Rgb::new(v, v, v);
    }

    fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h.value();

    Rgb::new(
        to_8bit(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_8bit(hue_to_rgb(p, q, h)),
        to_8bit(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    let &[row1, row2, row3] = matrix;

    [
        row1[0] * vector[0] + row1[1] * vector[1] + row1[2] * vector[2],
        row2[0] * vector[0] + row2[1] * vector[1] + row2[2] * vector[2],
        row3[0] * vector[0] + row3[1] * vector[1] + row3[2] * vector[2],
    ]
}

// http://www.brucelindbloom.com/index.html?Eqn_RGB_XYZ_Matrix.html

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [ 0.4124564, 0.3575761, 0.1804375 ],
    [ 0.2126729, 0.7151522, 0.0721750 ],
    [ 0.0193339, 0.1191920, 0.9503041 ],
];

/// The D65 reference white, scaled so that Y is 100.
pub const D65: [f64; 3] = [95.047, 100.0, 108.883];

const EPSILON: f64 = 0.008856;
const KAPPA: f64 = 7.787;

/// Convert an sRGB color to CIE L*a*b*.
///
/// This function gamma-decodes the channels, converts linear sRGB to XYZ
/// scaled to 0..=100, and then XYZ to L*a*b* relative to the [`D65`] white
/// point.
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    let linear = [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)];
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, &linear);

    #[inline]
    fn f(t: f64) -> f64 {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA * t + 16.0 / 116.0
        }
    }

    let fx = f(x * 100.0 / D65[0]);
    let fy = f(y * 100.0 / D65[1]);
    let fz = f(z * 100.0 / D65[2]);

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

// ====================================================================================================================

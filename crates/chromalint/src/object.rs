use serde::{Deserialize, Serialize};

use crate::core::{
    contrast_ratio, hsl_to_rgb, parse, parse_hashed, relative_luminance, rgb_to_hsl, rgb_to_lab,
};
use crate::error::ColorFormatError;

/// A 24-bit sRGB color.
///
/// This is the canonical representation of colors. Every color string
/// accepted by [`parse_color`](crate::parse_color) converges here, and every
/// other representation, i.e., [`Hsl`] and [`Lab`], is derived from it.
///
/// # Examples
///
/// Colors can be parsed from any of the supported formats and are displayed in
/// hashed hexadecimal notation.
/// ```
/// # use chromalint::Rgb;
/// # use chromalint::error::ColorFormatError;
/// let steel: Rgb = "SteelBlue".parse()?;
/// assert_eq!(steel, Rgb::new(70, 130, 180));
/// assert_eq!(steel.to_string(), "#4682b4");
/// assert_eq!(Rgb::from_hex("#4682B4")?, steel);
/// # Ok::<(), ColorFormatError>(())
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color in hashed hexadecimal notation only.
    ///
    /// Unlike [`Rgb as FromStr`](struct.Rgb.html#impl-FromStr-for-Rgb), this
    /// function does not recognize the functional and named formats. It does,
    /// however, trim white space and accept upper case digits.
    pub fn from_hex(s: &str) -> Result<Self, ColorFormatError> {
        let lowercase = s.trim().to_ascii_lowercase();
        parse_hashed(&lowercase)
    }

    /// Format this color in `#rrggbb` notation with lower case digits.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Get the coordinates as an array.
    pub const fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Convert this color to CIE L*a*b* with the D65 white point.
    pub fn to_lab(&self) -> Lab {
        rgb_to_lab(self.r, self.g, self.b)
    }

    /// Compute this color's relative luminance as defined by WCAG.
    pub fn relative_luminance(&self) -> f64 {
        relative_luminance(self.r, self.g, self.b)
    }

    /// Compute the WCAG contrast ratio between this and the other color.
    ///
    /// The ratio is symmetric and ranges from 1 for colors with the same
    /// luminance to 21 for black and white.
    /// ```
    /// # use chromalint::Rgb;
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// assert_eq!(black.contrast_ratio(&white), 21.0);
    /// assert_eq!(white.contrast_ratio(&black), 21.0);
    /// ```
    pub fn contrast_ratio(&self, other: &Self) -> f64 {
        contrast_ratio(self, other)
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse a color in hashed hexadecimal, `rgb()`, `rgba()`, `hsl()`,
    /// `hsla()`, or named format.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Rgb {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.to_array()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b))
    }
}

// ====================================================================================================================

/// A hue in degrees, normalized to `0.0..360.0`.
///
/// [`rgb_to_hsl`](crate::rgb_to_hsl) produces hues in degrees, whereas
/// [`hsl_to_rgb`](crate::hsl_to_rgb) consumes hues as [`Turns`]. The two
/// types convert into each other with `From`.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(f64);

impl Degrees {
    /// Create a new hue, wrapping the value into `0.0..360.0`.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            // rem_euclid may round up to the modulus itself for tiny negatives.
            let wrapped = value.rem_euclid(360.0);
            Self(if wrapped >= 360.0 { 0.0 } else { wrapped })
        } else {
            Self(0.0)
        }
    }

    /// Get the value in degrees.
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Rotate this hue by the given number of degrees.
    #[must_use = "method returns a new hue and does not mutate original value"]
    pub fn rotate(&self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }
}

impl From<Turns> for Degrees {
    fn from(value: Turns) -> Self {
        Self::new(value.0 * 360.0)
    }
}

/// A hue as fraction of a full turn, normalized to `0.0..1.0`.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Turns(f64);

impl Turns {
    /// Create a new hue, wrapping the value into `0.0..1.0`.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            let wrapped = value.rem_euclid(1.0);
            Self(if wrapped >= 1.0 { 0.0 } else { wrapped })
        } else {
            Self(0.0)
        }
    }

    /// Get the value as fraction of a turn.
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl From<Degrees> for Turns {
    fn from(value: Degrees) -> Self {
        Self::new(value.0 / 360.0)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// An HSL color.
///
/// The hue is in [`Degrees`], saturation and lightness are percentages in
/// `0.0..=100.0`. HSL colors are a convenience for adjusting colors in human
/// friendly steps. They are always derived from and converted back to [`Rgb`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: Degrees,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color.
    ///
    /// The hue wraps around, saturation and lightness are clamped to
    /// `0.0..=100.0`. Not-a-number becomes zero.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        fn percent(value: f64) -> f64 {
            if value.is_nan() {
                0.0
            } else {
                value.clamp(0.0, 100.0)
            }
        }

        Self {
            h: Degrees::new(h),
            s: percent(s),
            l: percent(l),
        }
    }

    /// Convert this color to RGB.
    ///
    /// This method takes care of converting degrees to turns and percentages
    /// to fractions before invoking [`hsl_to_rgb`](crate::hsl_to_rgb).
    pub fn to_rgb(&self) -> Rgb {
        hsl_to_rgb(Turns::from(self.h), self.s / 100.0, self.l / 100.0)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A CIE L*a*b* color relative to the D65 white point.
///
/// Lightness ranges from 0 to 100, whereas a* and b* are unbounded but fall
/// into roughly `-128.0..=128.0` for sRGB colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Create a new L*a*b* color.
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Compute the chroma, i.e., the distance from the neutral axis.
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }
}

impl From<Rgb> for Lab {
    fn from(value: Rgb) -> Self {
        value.to_lab()
    }
}

// ====================================================================================================================

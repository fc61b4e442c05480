use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::object::{Lab, Rgb};

/// Compute CIE76 Delta-E, i.e., the Euclidian distance in L*a*b*.
#[allow(non_snake_case)]
pub fn delta_e_cie76(lab1: &Lab, lab2: &Lab) -> f64 {
    let ΔL = lab1.l - lab2.l;
    let Δa = lab1.a - lab2.a;
    let Δb = lab1.b - lab2.b;

    (ΔL * ΔL + Δa * Δa + Δb * Δb).sqrt()
}

/// Compute CIE94 Delta-E with the graphic arts weights.
///
/// The chroma and hue weights depend on the chroma of the first color only,
/// which makes this metric asymmetric.
#[allow(non_snake_case)]
pub fn delta_e_cie94(lab1: &Lab, lab2: &Lab) -> f64 {
    const KL: f64 = 1.0;
    const KC: f64 = 1.0;
    const KH: f64 = 1.0;
    const K1: f64 = 0.045;
    const K2: f64 = 0.015;

    let ΔL = lab1.l - lab2.l;
    let C1 = lab1.chroma();
    let C2 = lab2.chroma();
    let ΔC = C1 - C2;
    let Δa = lab1.a - lab2.a;
    let Δb = lab1.b - lab2.b;

    // Rounding may push the squared hue difference slightly below zero.
    let ΔH2 = (Δa * Δa + Δb * Δb - ΔC * ΔC).max(0.0);

    let SL = 1.0;
    let SC = 1.0 + K1 * C1;
    let SH = 1.0 + K2 * C1;

    let term_l = ΔL / (KL * SL);
    let term_c = ΔC / (KC * SC);
    let term_h2 = ΔH2 / ((KH * SH) * (KH * SH));

    (term_l * term_l + term_c * term_c + term_h2).sqrt()
}

/// 25 to the seventh power.
const POW25_7: f64 = 6_103_515_625.0;

/// Compute the hue angle in degrees `0..360` for the a/b coordinates.
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        let h = b.atan2(a).to_degrees();
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    }
}

/// Compute CIEDE2000 Delta-E.
///
/// This function implements the complete formula from CIE technical report
/// 142-2001 with `kL = kC = kH = 1`, including the rescaling of a* by G, the
/// zero-chroma special cases for hue difference and mean hue, the wrap-around
/// of the mean hue, and the rotation term RT for blues. It reproduces the
/// reference values published by Sharma, Wu, and Dalal to four decimals.
#[allow(non_snake_case)]
pub fn delta_e_ciede2000(lab1: &Lab, lab2: &Lab) -> f64 {
    const KL: f64 = 1.0;
    const KC: f64 = 1.0;
    const KH: f64 = 1.0;

    let Lab {
        l: L1,
        a: a1,
        b: b1,
    } = *lab1;
    let Lab {
        l: L2,
        a: a2,
        b: b2,
    } = *lab2;

    // Rescale a* by G, which depends on the mean chroma.
    let C1 = a1.hypot(b1);
    let C2 = a2.hypot(b2);
    let C_mean_7 = ((C1 + C2) / 2.0).powi(7);
    let G = 0.5 * (1.0 - (C_mean_7 / (C_mean_7 + POW25_7)).sqrt());

    let a1_ = a1 * (1.0 + G);
    let a2_ = a2 * (1.0 + G);
    let C1_ = a1_.hypot(b1);
    let C2_ = a2_.hypot(b2);
    let h1_ = hue_angle(a1_, b1);
    let h2_ = hue_angle(a2_, b2);
    let chroma_product = C1_ * C2_;

    // Differences
    let ΔL_ = L2 - L1;
    let ΔC_ = C2_ - C1_;
    let Δh_ = if chroma_product == 0.0 {
        0.0
    } else {
        let Δh = h2_ - h1_;
        if Δh > 180.0 {
            Δh - 360.0
        } else if Δh < -180.0 {
            Δh + 360.0
        } else {
            Δh
        }
    };
    let ΔH_ = 2.0 * chroma_product.sqrt() * (Δh_.to_radians() / 2.0).sin();

    // Means
    let L_mean = (L1 + L2) / 2.0;
    let C_mean = (C1_ + C2_) / 2.0;
    let h_mean = if chroma_product == 0.0 {
        h1_ + h2_
    } else if (h1_ - h2_).abs() <= 180.0 {
        (h1_ + h2_) / 2.0
    } else if h1_ + h2_ < 360.0 {
        (h1_ + h2_ + 360.0) / 2.0
    } else {
        (h1_ + h2_ - 360.0) / 2.0
    };

    // Weighting functions
    let T = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let L_offset_2 = (L_mean - 50.0) * (L_mean - 50.0);
    let SL = 1.0 + (0.015 * L_offset_2) / (20.0 + L_offset_2).sqrt();
    let SC = 1.0 + 0.045 * C_mean;
    let SH = 1.0 + 0.015 * C_mean * T;

    // Rotation
    let Δθ = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();
    let C_mean_7 = C_mean.powi(7);
    let RC = 2.0 * (C_mean_7 / (C_mean_7 + POW25_7)).sqrt();
    let RT = -(2.0 * Δθ).to_radians().sin() * RC;

    let term_l = ΔL_ / (KL * SL);
    let term_c = ΔC_ / (KC * SC);
    let term_h = ΔH_ / (KH * SH);

    (term_l * term_l + term_c * term_c + term_h * term_h + RT * term_c * term_h).sqrt()
}

// --------------------------------------------------------------------------------------------------------------------

/// The choice of color difference algorithm.
///
/// Each variant maps onto one of [`delta_e_cie76`], [`delta_e_cie94`], and
/// [`delta_e_ciede2000`]. Parsing a name with [`str::parse`] is strict and
/// fails for unknown names, whereas [`DeltaE::from_name_lenient`] falls back
/// on the default [`DeltaE::Ciede2000`].
///
/// ```
/// # use chromalint::{DeltaE, Rgb};
/// # use chromalint::error::AnalysisError;
/// let algorithm: DeltaE = "cie76".parse()?;
/// assert_eq!(algorithm, DeltaE::Cie76);
/// assert!("cie2000".parse::<DeltaE>().is_err());
/// assert_eq!(DeltaE::from_name_lenient("cie2000"), DeltaE::Ciede2000);
///
/// let white = Rgb::new(255, 255, 255);
/// assert_eq!(DeltaE::default().distance_rgb(&white, &white), 0.0);
/// # Ok::<(), AnalysisError>(())
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeltaE {
    #[serde(rename = "CIE76")]
    Cie76,
    #[serde(rename = "CIE94")]
    Cie94,
    #[default]
    #[serde(rename = "CIEDE2000")]
    Ciede2000,
}

impl DeltaE {
    /// All algorithms, in order of increasing sophistication.
    pub const ALL: [DeltaE; 3] = [DeltaE::Cie76, DeltaE::Cie94, DeltaE::Ciede2000];

    /// Get this algorithm's canonical name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Cie76 => "CIE76",
            Self::Cie94 => "CIE94",
            Self::Ciede2000 => "CIEDE2000",
        }
    }

    /// Get the function implementing this algorithm.
    pub const fn function(&self) -> fn(&Lab, &Lab) -> f64 {
        match *self {
            Self::Cie76 => delta_e_cie76,
            Self::Cie94 => delta_e_cie94,
            Self::Ciede2000 => delta_e_ciede2000,
        }
    }

    /// Compute the distance between the two L*a*b* colors.
    pub fn distance(&self, lab1: &Lab, lab2: &Lab) -> f64 {
        (self.function())(lab1, lab2)
    }

    /// Compute the distance between the two sRGB colors.
    pub fn distance_rgb(&self, color1: &Rgb, color2: &Rgb) -> f64 {
        self.distance(&color1.to_lab(), &color2.to_lab())
    }

    /// Resolve the algorithm name, falling back on CIEDE2000.
    ///
    /// Unknown names are not an error but are logged as a warning.
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|error: AnalysisError| {
            tracing::warn!(%error, "falling back on CIEDE2000");
            Self::Ciede2000
        })
    }
}

impl std::str::FromStr for DeltaE {
    type Err = AnalysisError;

    /// Parse the algorithm name, ignoring case and surrounding white space.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| AnalysisError::UnknownAlgorithm(name.to_owned()))
    }
}

impl std::fmt::Display for DeltaE {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A coarse, human-readable classification of Delta-E values.
///
/// The thresholds are the customary ones for CIEDE2000.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DifferenceCategory {
    /// Below 1: not perceptible.
    Imperceptible,
    /// From 1 up to 2: perceptible through close observation.
    BarelyPerceptible,
    /// From 2 up to 10: perceptible at a glance.
    Noticeable,
    /// From 10 up to 50: colors are more similar than opposite.
    Distinct,
    /// From 50 up: colors are nearly opposite.
    VeryDifferent,
}

impl DifferenceCategory {
    /// Classify the Delta-E value.
    pub fn classify(delta_e: f64) -> Self {
        if delta_e < 1.0 {
            Self::Imperceptible
        } else if delta_e < 2.0 {
            Self::BarelyPerceptible
        } else if delta_e < 10.0 {
            Self::Noticeable
        } else if delta_e < 50.0 {
            Self::Distinct
        } else {
            Self::VeryDifferent
        }
    }
}

// ====================================================================================================================

//! WCAG conformance levels and their contrast requirements.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A WCAG conformance level.
///
/// Each level fixes a minimum contrast ratio, which is lower for large text:
///
/// | Level | Normal text | Large text |
/// | ----- | ----------: | ---------: |
/// | A     |         3.0 |        3.0 |
/// | AA    |         4.5 |        3.0 |
/// | AAA   |         7.0 |        4.5 |
///
/// ```
/// # use chromalint::wcag::WcagLevel;
/// assert_eq!(WcagLevel::Aa.required_ratio(false), 4.5);
/// assert_eq!(WcagLevel::Aa.required_ratio(true), 3.0);
/// assert_eq!(WcagLevel::highest_passing(5.0, false), Some(WcagLevel::Aa));
/// assert_eq!(WcagLevel::highest_passing(2.0, true), None);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "A")]
    A,
    #[default]
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    /// All levels, from weakest to strongest.
    pub const ALL: [WcagLevel; 3] = [WcagLevel::A, WcagLevel::Aa, WcagLevel::Aaa];

    /// Get this level's name.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::A => "A",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }

    /// Look up the minimum contrast ratio for this level.
    pub const fn required_ratio(&self, large_text: bool) -> f64 {
        match (*self, large_text) {
            (Self::A, _) => 3.0,
            (Self::Aa, false) => 4.5,
            (Self::Aa, true) => 3.0,
            (Self::Aaa, false) => 7.0,
            (Self::Aaa, true) => 4.5,
        }
    }

    /// Determine whether the contrast ratio meets this level.
    pub fn is_met_by(&self, ratio: f64, large_text: bool) -> bool {
        ratio >= self.required_ratio(large_text)
    }

    /// Determine the strongest level met by the contrast ratio, if any.
    pub fn highest_passing(ratio: f64, large_text: bool) -> Option<Self> {
        Self::ALL
            .into_iter()
            .rev()
            .find(|level| level.is_met_by(ratio, large_text))
    }
}

impl std::str::FromStr for WcagLevel {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| AnalysisError::UnknownLevel(name.to_owned()))
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::WcagLevel;

    #[test]
    fn test_requirements() {
        assert_eq!(WcagLevel::A.required_ratio(false), 3.0);
        assert_eq!(WcagLevel::A.required_ratio(true), 3.0);
        assert_eq!(WcagLevel::Aa.required_ratio(false), 4.5);
        assert_eq!(WcagLevel::Aa.required_ratio(true), 3.0);
        assert_eq!(WcagLevel::Aaa.required_ratio(false), 7.0);
        assert_eq!(WcagLevel::Aaa.required_ratio(true), 4.5);
    }

    #[test]
    fn test_highest_passing() {
        assert_eq!(WcagLevel::highest_passing(21.0, false), Some(WcagLevel::Aaa));
        assert_eq!(WcagLevel::highest_passing(4.5, true), Some(WcagLevel::Aaa));
        assert_eq!(WcagLevel::highest_passing(4.47, false), Some(WcagLevel::A));
        assert_eq!(WcagLevel::highest_passing(1.0, false), None);
    }

    #[test]
    fn test_names() {
        assert_eq!("aaa".parse::<WcagLevel>(), Ok(WcagLevel::Aaa));
        assert!("AAAA".parse::<WcagLevel>().is_err());
        assert_eq!(WcagLevel::Aa.to_string(), "AA");
    }
}

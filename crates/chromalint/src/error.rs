//! Utility module with chromalint's errors.

/// An erroneous color format.
///
/// [`Rgb::from_str`](crate::Rgb) and [`parse_color`](crate::parse_color)
/// report why a string does not describe a color. The variants are ordered
/// roughly by how early parsing gives up.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorFormatError {
    /// A color format that is empty or all white space.
    #[error("color format should not be empty")]
    Empty,

    /// A color format that does not start with `#`, `rgb(`, `rgba(`, `hsl(`,
    /// or `hsla(` and is not a color name either.
    #[error("color format should start with `#`, `rgb(`, `rgba(`, `hsl(`, or `hsla(`")]
    UnknownFormat,

    /// A hashed hexadecimal color with a number of digits other than 3 or 6.
    /// For example, `#ff` and the alpha-carrying `#ff000080` are both
    /// rejected.
    #[error("hashed hexadecimal color should have 3 or 6 digits but has {0}")]
    WrongHexLength(usize),

    /// A hashed hexadecimal color with a character that is not a hexadecimal
    /// digit, e.g., `#efg`.
    #[error("hashed hexadecimal color should contain only hexadecimal digits")]
    MalformedHex,

    /// A functional color format without the closing parenthesis. For
    /// example, `rgb(1, 2, 3` is missing the closing parenthesis.
    #[error("color format should include a closing parenthesis but has none")]
    NoClosingParenthesis,

    /// A functional color format that is missing the coordinate with the
    /// given zero-based index. For example, `rgb(1, 2)` is missing the third
    /// coordinate.
    #[error("color format should have 3 coordinates but is missing #{index}", index = .0 + 1)]
    MissingCoordinate(usize),

    /// A functional color format with more than three coordinates and an
    /// alpha value.
    #[error("color format should have at most 3 coordinates and alpha but has more")]
    TooManyCoordinates,

    /// A coordinate that should be a non-negative decimal integer but is not.
    #[error("color format coordinate #{index} should be a decimal integer", index = .0 + 1)]
    MalformedInteger(usize),

    /// A coordinate or alpha value that should be a decimal number but is not.
    #[error("color format coordinate #{index} should be a decimal number", index = .0 + 1)]
    MalformedNumber(usize),

    /// An RGB channel greater than 255.
    #[error("color format coordinate #{index} should be in range 0..=255 but is {1}", index = .0 + 1)]
    OutOfRange(usize, u32),

    /// An HSL saturation or lightness without the trailing `%`.
    #[error("color format coordinate #{index} should be a percentage", index = .0 + 1)]
    MissingPercent(usize),

    /// A color name that is not one of the CSS named colors.
    #[error("color name should be a CSS named color but `{0}` is not")]
    UnknownName(String),
}

// ====================================================================================================================

/// An error surfaced by the validators.
///
/// With the exception of [`AnalysisError::UnknownAlgorithm`] and
/// [`AnalysisError::UnknownLevel`], which result from strict parsing of names,
/// these errors never escape as `Err` values. Instead, the validators render
/// them into the `error` field of their results.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The foreground color of a contrast check failed to parse.
    #[error("Invalid foreground color")]
    InvalidForeground,

    /// The background color of a contrast check failed to parse.
    #[error("Invalid background color")]
    InvalidBackground,

    /// A distinction check received fewer than two parsable colors.
    #[error("At least two valid colors are required, but only {0} could be parsed")]
    TooFewColors(usize),

    /// A color difference algorithm name is not one of `CIE76`, `CIE94`, or
    /// `CIEDE2000`.
    #[error("Unknown color difference algorithm `{0}`")]
    UnknownAlgorithm(String),

    /// A WCAG level name is not one of `A`, `AA`, or `AAA`.
    #[error("Unknown WCAG level `{0}`")]
    UnknownLevel(String),
}

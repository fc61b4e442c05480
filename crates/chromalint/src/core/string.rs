use super::names::named_color;
use crate::error::ColorFormatError;
use crate::object::{Hsl, Rgb};

/// Parse a 24-bit color in hashed hexadecimal format. This function expects
/// lowercase input and transparently handles single-digit coordinates.
pub(crate) fn parse_hashed(s: &str) -> Result<Rgb, ColorFormatError> {
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;

    let length = digits.chars().count();
    if length != 3 && length != 6 {
        return Err(ColorFormatError::WrongHexLength(length));
    } else if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    // All digits are ASCII, so byte offsets are character offsets.
    fn parse_coordinate(digits: &str, index: usize) -> Result<u8, ColorFormatError> {
        let factor = digits.len() / 3;
        let t = digits
            .get(factor * index..factor * (index + 1))
            .ok_or(ColorFormatError::MalformedHex)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    }

    Ok(Rgb::new(
        parse_coordinate(digits, 0)?,
        parse_coordinate(digits, 1)?,
        parse_coordinate(digits, 2)?,
    ))
}

// --------------------------------------------------------------------------------------------------------------------

/// Split the arguments of a functional color format into three coordinates,
/// ignoring the optional fourth alpha value after checking that it is a
/// number.
fn split_arguments(body: &str) -> Result<[&str; 3], ColorFormatError> {
    let body = body
        .strip_suffix(')')
        .ok_or(ColorFormatError::NoClosingParenthesis)?;

    let mut iter = body.split(',').map(str::trim);
    let mut next_coordinate = |index| match iter.next() {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(ColorFormatError::MissingCoordinate(index)),
    };

    let c1 = next_coordinate(0)?;
    let c2 = next_coordinate(1)?;
    let c3 = next_coordinate(2)?;

    // The alpha value is validated but not retained.
    if let Some(alpha) = iter.next() {
        parse_number(alpha, 3)?;
    }
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok([c1, c2, c3])
}

/// Parse a finite decimal number.
fn parse_number(s: &str, index: usize) -> Result<f64, ColorFormatError> {
    s.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(ColorFormatError::MalformedNumber(index))
}

/// Parse the arguments of `rgb()` and `rgba()`, which must be decimal
/// integers `0..=255`.
fn parse_rgb_function(body: &str) -> Result<Rgb, ColorFormatError> {
    fn parse_channel(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ColorFormatError::MalformedInteger(index));
        }

        let n: u32 = s
            .parse()
            .map_err(|_| ColorFormatError::MalformedInteger(index))?;
        u8::try_from(n).map_err(|_| ColorFormatError::OutOfRange(index, n))
    }

    let [c1, c2, c3] = split_arguments(body)?;
    Ok(Rgb::new(
        parse_channel(c1, 0)?,
        parse_channel(c2, 1)?,
        parse_channel(c3, 2)?,
    ))
}

/// Parse the arguments of `hsl()` and `hsla()`. The hue must be an integer
/// number of degrees, whereas saturation and lightness must be percentages.
fn parse_hsl_function(body: &str) -> Result<Rgb, ColorFormatError> {
    fn parse_percentage(s: &str, index: usize) -> Result<f64, ColorFormatError> {
        let number = s
            .strip_suffix('%')
            .ok_or(ColorFormatError::MissingPercent(index))?;
        parse_number(number.trim_end(), index)
    }

    let [c1, c2, c3] = split_arguments(body)?;
    let hue: i64 = c1
        .parse()
        .map_err(|_| ColorFormatError::MalformedInteger(0))?;
    let saturation = parse_percentage(c2, 1)?;
    let lightness = parse_percentage(c3, 2)?;

    Ok(Hsl::new(hue as f64, saturation, lightness).to_rgb())
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse the string into a color.
///
/// This function recognizes, in order, hashed hexadecimal colors with 3 or 6
/// digits, the `rgb()` and `rgba()` functions with comma-separated decimal
/// integers, the `hsl()` and `hsla()` functions with an integer hue and
/// percentages for saturation and lightness, and CSS color names. Alpha values
/// are checked but ignored. Before trying any of these formats, this function
/// trims leading and trailing white space and converts ASCII letters to
/// lowercase.
pub(crate) fn parse(s: &str) -> Result<Rgb, ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if s.is_empty() {
        Err(ColorFormatError::Empty)
    } else if s.starts_with('#') {
        parse_hashed(s)
    } else if let Some(body) = s.strip_prefix("rgba(").or_else(|| s.strip_prefix("rgb(")) {
        parse_rgb_function(body)
    } else if let Some(body) = s.strip_prefix("hsla(").or_else(|| s.strip_prefix("hsl(")) {
        parse_hsl_function(body)
    } else if s.bytes().all(|b| b.is_ascii_alphabetic()) {
        named_color(s).ok_or_else(|| ColorFormatError::UnknownName(s.to_owned()))
    } else {
        Err(ColorFormatError::UnknownFormat)
    }
}

/// Parse the string into a color, treating all errors as `None`.
///
/// This is the permissive entry point used by the validators. A `None` result
/// means the text is not a color, which is distinct from the absence of a
/// color. The reason for rejecting the text is logged at debug level.
///
/// ```
/// # use chromalint::{parse_color, Rgb};
/// assert_eq!(parse_color("#abc"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
/// assert_eq!(parse_color("rgba(255, 0, 0, 0.5)"), Some(Rgb::new(255, 0, 0)));
/// assert_eq!(parse_color("hsl(120, 100%, 50%)"), Some(Rgb::new(0, 255, 0)));
/// assert_eq!(parse_color("notacolor"), None);
/// ```
pub fn parse_color(s: &str) -> Option<Rgb> {
    parse(s)
        .inspect_err(|error| tracing::debug!(input = s, %error, "rejecting color"))
        .ok()
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, parse_color, parse_hashed, ColorFormatError};
    use crate::object::Rgb;

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(parse_hashed("#112233")?, Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(parse_hashed("fff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse_hashed("#ff"), Err(ColorFormatError::WrongHexLength(2)));
        assert_eq!(
            parse_hashed("#ff000080"),
            Err(ColorFormatError::WrongHexLength(8))
        );
        assert_eq!(parse_hashed("#1234"), Err(ColorFormatError::WrongHexLength(4)));
        assert_eq!(parse_hashed("#💩00"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#0g0"), Err(ColorFormatError::MalformedHex));
        assert_eq!(parse_hashed("#00000g"), Err(ColorFormatError::MalformedHex));
        Ok(())
    }

    #[test]
    fn test_parse_rgb() -> Result<(), ColorFormatError> {
        assert_eq!(parse("rgb(31, 119, 180)")?, Rgb::new(31, 119, 180));
        assert_eq!(parse("RGB(0,0,0)")?, Rgb::new(0, 0, 0));
        assert_eq!(parse(" rgba( 255 , 127 , 14 , 0.25 ) ")?, Rgb::new(255, 127, 14));
        assert_eq!(parse("rgba(1, 2, 3)")?, Rgb::new(1, 2, 3));
        assert_eq!(parse("rgb(1, 2, 3, 1)")?, Rgb::new(1, 2, 3));

        assert_eq!(parse("rgb(1, 2, 3"), Err(ColorFormatError::NoClosingParenthesis));
        assert_eq!(parse("rgb(1, 2)"), Err(ColorFormatError::MissingCoordinate(2)));
        assert_eq!(parse("rgb(1, , 3)"), Err(ColorFormatError::MissingCoordinate(1)));
        assert_eq!(
            parse("rgb(1, 2, 3, 1, 5)"),
            Err(ColorFormatError::TooManyCoordinates)
        );
        assert_eq!(parse("rgb(1.5, 2, 3)"), Err(ColorFormatError::MalformedInteger(0)));
        assert_eq!(parse("rgb(-1, 2, 3)"), Err(ColorFormatError::MalformedInteger(0)));
        assert_eq!(parse("rgb(1, 256, 3)"), Err(ColorFormatError::OutOfRange(1, 256)));
        assert_eq!(parse("rgba(1, 2, 3, x)"), Err(ColorFormatError::MalformedNumber(3)));
        assert_eq!(parse("rgba(1, 2, 3, inf)"), Err(ColorFormatError::MalformedNumber(3)));
        Ok(())
    }

    #[test]
    fn test_parse_hsl() -> Result<(), ColorFormatError> {
        assert_eq!(parse("hsl(0, 100%, 50%)")?, Rgb::new(255, 0, 0));
        assert_eq!(parse("hsl(240, 100%, 50%)")?, Rgb::new(0, 0, 255));
        assert_eq!(parse("hsl(600, 100%, 50%)")?, Rgb::new(0, 0, 255));
        assert_eq!(parse("hsl(-120, 100%, 50%)")?, Rgb::new(0, 0, 255));
        assert_eq!(parse("hsla(207, 44%, 49%, 0.5)")?, Rgb::new(70, 130, 180));
        assert_eq!(parse("hsl(0, 0%, 50.2%)")?, Rgb::new(128, 128, 128));

        assert_eq!(parse("hsl(120.5, 50%, 50%)"), Err(ColorFormatError::MalformedInteger(0)));
        assert_eq!(parse("hsl(120, 50, 50%)"), Err(ColorFormatError::MissingPercent(1)));
        assert_eq!(parse("hsl(120, 50%, abc%)"), Err(ColorFormatError::MalformedNumber(2)));
        Ok(())
    }

    #[test]
    fn test_parse_named() -> Result<(), ColorFormatError> {
        assert_eq!(parse("steelblue")?, Rgb::new(70, 130, 180));
        assert_eq!(parse("  DarkSlateGray ")?, Rgb::new(47, 79, 79));
        assert_eq!(
            parse("notacolor"),
            Err(ColorFormatError::UnknownName("notacolor".to_owned()))
        );
        assert_eq!(parse("steel blue"), Err(ColorFormatError::UnknownFormat));
        Ok(())
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color(""), None);
        assert_eq!(parse_color("   "), None);
        assert_eq!(parse_color("notacolor"), None);
        assert_eq!(parse_color("#FFF"), Some(Rgb::new(255, 255, 255)));
    }
}

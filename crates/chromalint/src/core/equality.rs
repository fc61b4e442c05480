/// The default tolerance for [`close_enough`].
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Test macro for asserting the approximate equality of floating point
/// numbers.
///
/// Without a third argument, this macro uses [`DEFAULT_TOLERANCE`]. Two
/// not-a-numbers are considered equal.
///
/// # Panics
///
/// This macro panics if the two numbers differ by more than the tolerance. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        $crate::assert_close_enough!($f1, $f2, $crate::DEFAULT_TOLERANCE)
    };
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {
        let (f1, f2): (f64, f64) = ($f1, $f2);
        assert!(
            $crate::close_enough(f1, f2, $tolerance),
            "quantities differ:\n{:?}\n{:?}",
            f1,
            f2
        );
    };
}

/// Determine whether the two numbers differ by at most the tolerance.
pub fn close_enough(f1: f64, f2: f64, tolerance: f64) -> bool {
    if f1.is_nan() || f2.is_nan() {
        return f1.is_nan() && f2.is_nan();
    }

    (f1 - f2).abs() <= tolerance
}

#[cfg(test)]
mod test {
    use super::close_enough;

    #[test]
    fn test_close_enough() {
        assert!(close_enough(1.0, 1.0 + 1e-12, 1e-9));
        assert!(!close_enough(1.0, 1.001, 1e-9));
        assert!(close_enough(f64::NAN, f64::NAN, 1e-9));
        assert!(!close_enough(f64::NAN, 0.0, 1e-9));
    }
}

use crate::SnapError;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, and outputs a tuple of the value of the expression with the
/// elapsed time, as a [Duration](std::time::Duration).
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Round to the nearest whole number, with halfway cases going **away from
/// zero** (2.5 => 3, -2.5 => -3). Every rounding step in the snapping math
/// goes through here, so that ambiguous points always land in the same cell.
/// Don't swap this out for a round-half-to-even implementation!
pub fn round_half_away(value: f64) -> f64 {
    // f64::round is documented as rounding half-way cases away from 0.0
    value.round()
}

/// Make sure a coordinate value is finite, i.e. not NaN or infinite. The
/// axis name is only used for the error message.
pub fn check_finite(axis: &'static str, value: f64) -> Result<f64, SnapError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SnapError::NonFiniteInput { axis, value })
    }
}

/// Make sure a grid size (apothem or interval) is usable as a divisor, i.e.
/// finite and strictly positive.
pub fn check_grid_size(size: f64) -> Result<f64, SnapError> {
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(SnapError::InvalidGridSize(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(0.0), 0.0);
        assert_eq!(round_half_away(1.4999), 1.0);
        assert_eq!(round_half_away(-1.4999), -1.0);

        // Ties go away from zero, NOT to the even neighbor
        assert_eq!(round_half_away(0.5), 1.0);
        assert_eq!(round_half_away(-0.5), -1.0);
        assert_eq!(round_half_away(2.5), 3.0);
        assert_eq!(round_half_away(-2.5), -3.0);
    }

    #[test]
    fn test_check_grid_size() {
        assert_eq!(check_grid_size(1.0), Ok(1.0));
        assert_eq!(check_grid_size(0.001), Ok(0.001));

        assert_eq!(check_grid_size(0.0), Err(SnapError::InvalidGridSize(0.0)));
        assert_eq!(
            check_grid_size(-2.0),
            Err(SnapError::InvalidGridSize(-2.0))
        );
        assert!(matches!(
            check_grid_size(f64::NAN),
            Err(SnapError::InvalidGridSize(_))
        ));
        assert!(matches!(
            check_grid_size(f64::INFINITY),
            Err(SnapError::InvalidGridSize(_))
        ));
    }

    #[test]
    fn test_check_finite() {
        assert_eq!(check_finite("x", -3.5), Ok(-3.5));
        assert!(matches!(
            check_finite("x", f64::NAN),
            Err(SnapError::NonFiniteInput { axis: "x", .. })
        ));
        assert!(matches!(
            check_finite("z", f64::NEG_INFINITY),
            Err(SnapError::NonFiniteInput { axis: "z", .. })
        ));
    }
}

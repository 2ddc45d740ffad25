//! Guarded ratio helpers shared by the growth and share computations.

/// Percentage change from `base` to `current`.
///
/// Returns `0.0` when `base` is zero, negative, or not finite, so callers
/// never see `NaN` or an infinity.
pub fn percent_change(base: f64, current: f64) -> f64 {
    if !base.is_finite() || base <= 0.0 {
        return 0.0;
    }
    finite_or_zero((current - base) / base * 100.0)
}

/// `part` as a percentage of `total`, guarded the same way as [`percent_change`].
pub fn share_percent(part: f64, total: f64) -> f64 {
    if !total.is_finite() || total <= 0.0 {
        return 0.0;
    }
    finite_or_zero(part / total * 100.0)
}

/// Rounds to two decimal places, half away from zero.
pub fn round_cents(value: f64) -> f64 {
    finite_or_zero((value * 100.0).round() / 100.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_handles_growth_and_decline() {
        assert_eq!(percent_change(50.0, 100.0), 100.0);
        assert_eq!(percent_change(200.0, 150.0), -25.0);
    }

    #[test]
    fn zero_or_negative_base_yields_zero() {
        assert_eq!(percent_change(0.0, 10.0), 0.0);
        assert_eq!(percent_change(-5.0, 10.0), 0.0);
        assert_eq!(percent_change(f64::NAN, 10.0), 0.0);
        assert_eq!(share_percent(3.0, 0.0), 0.0);
    }

    #[test]
    fn overflowing_ratio_is_clamped_to_zero() {
        assert_eq!(percent_change(f64::MIN_POSITIVE, f64::MAX), 0.0);
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round_cents(2.456), 2.46);
        assert_eq!(round_cents(-1.004), -1.0);
        assert_eq!(round_cents(f64::INFINITY), 0.0);
    }

    #[test]
    fn share_of_total() {
        assert_eq!(share_percent(25.0, 200.0), 12.5);
    }
}

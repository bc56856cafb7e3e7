/// Lowest BMI shown on the meter
pub const MIN_BMI: f64 = 15.0;

/// Highest BMI shown on the meter
pub const MAX_BMI: f64 = 40.0;

/// The indicator never starts closer than this to the meter's right edge
pub const INDICATOR_INSET: f64 = 5.0;

/// Calculate the indicator's left offset in pixels for a BMI value
///
/// Linearly maps `bmi` from `[MIN_BMI, MAX_BMI]` onto `[0, meter_width]`,
/// then clamps to `[0, meter_width - INDICATOR_INSET]`.
///
/// The lower bound is applied first and the upper bound last, so on a meter
/// narrower than the inset the result is `meter_width - INDICATOR_INSET`.
#[inline]
pub fn indicator_offset(bmi: f64, meter_width: f64) -> f64 {
    let position = (bmi - MIN_BMI) / (MAX_BMI - MIN_BMI) * meter_width;
    position.max(0.0).min(meter_width - INDICATOR_INSET)
}

/// Format an offset as an inline CSS pixel length
pub fn format_px(offset: f64) -> String {
    format!("{}px", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_inside_range() {
        let offset = indicator_offset(27.5, 300.0);
        assert!((offset - 150.0).abs() < 1e-9);

        let offset = indicator_offset(22.9, 250.0);
        assert!((offset - 79.0).abs() < 1e-9);
    }

    #[test]
    fn test_offset_at_bounds() {
        assert_eq!(indicator_offset(15.0, 300.0), 0.0);
        assert_eq!(indicator_offset(40.0, 300.0), 295.0);
    }

    #[test]
    fn test_offset_clamps() {
        assert_eq!(indicator_offset(10.0, 300.0), 0.0);
        assert_eq!(indicator_offset(-3.0, 300.0), 0.0);
        assert_eq!(indicator_offset(55.0, 300.0), 295.0);
        assert_eq!(indicator_offset(39.9, 300.0), 295.0);
    }

    #[test]
    fn test_offset_narrow_meter() {
        assert_eq!(indicator_offset(30.0, 3.0), -2.0);
        assert_eq!(indicator_offset(30.0, 0.0), -5.0);
    }

    #[test]
    fn test_format_px() {
        assert_eq!(format_px(150.0), "150px");
        assert_eq!(format_px(79.2), "79.2px");
    }
}

/// Linear interpolation: `min_value` at `factor == 0`, `max_value` at `factor == 1`.
pub fn interpolate_linear(min_value: f64, max_value: f64, factor: f64) -> f64 {
    min_value + (max_value - min_value) * factor
}

/// Clamped linear map of `value` onto `[0, 1]`.
///
/// Returns exactly `0` at or below `min_value` and exactly `1` at or above
/// `max_value`. When both bounds coincide the map is a step at that point.
pub fn map_piecewise_linear(value: f64, min_value: f64, max_value: f64) -> f64 {
    if value <= min_value {
        return 0.0;
    }
    if value >= max_value {
        return 1.0;
    }
    (value - min_value) / (max_value - min_value)
}

/// Order of magnitude of `value`, i.e. `floor(log10(|value|))`.
///
/// Zero and non-finite values have no order of magnitude.
pub fn order_of_magnitude(value: f64) -> Option<i32> {
    if value == 0.0 || !value.is_finite() {
        return None;
    }
    Some(value.abs().log10().floor() as i32)
}

/// Smallest non-zero finite magnitude in `data`.
pub fn min_abs_nonzero(data: &[f64]) -> Option<f64> {
    data.iter()
        .copied()
        .filter(|value| *value != 0.0 && value.is_finite())
        .map(f64::abs)
        .min_by(|a, b| a.total_cmp(b))
}

pub fn is_non_decreasing(data: &[f64]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}

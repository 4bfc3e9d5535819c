/// Largest `f64` strictly below 1.0.
const MAX_NORMALIZED: f64 = f64::from_bits(0x3FEF_FFFF_FFFF_FFFF);

/// Compress a non-negative ratio into a score in `[0, 1)`.
///
/// Computes `1 - 1/(1 + v)`. The curve starts at 0, is strictly increasing,
/// and approaches 1 without reaching it. Ratios large enough to round to 1.0
/// in floating point are held at the largest value below 1. NaN is returned unchanged.
#[must_use]
pub fn normalize(value: f64) -> f64 {
    debug_assert!(
        value.is_nan() || value >= 0.0,
        "normalize is only defined for non-negative values, got {value}"
    );

    // `f64::min` would turn NaN into MAX_NORMALIZED
    if value.is_nan() {
        return value;
    }

    (1.0 - 1.0 / (1.0 + value)).min(MAX_NORMALIZED)
}

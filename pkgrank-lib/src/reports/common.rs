//! Common utilities shared across report generators.

use crate::scoring::{CompositeScore, Dimension};

/// Format a dimension of a score as a fixed-precision decimal string.
///
/// The license dimension is a pass/fail indicator and is always printed as `0` or `1`.
/// Returns `None` for dimensions that are not computed.
pub fn format_dimension(score: &CompositeScore, dimension: Dimension, decimal_places: usize) -> Option<String> {
    if !dimension.is_computed() {
        return None;
    }

    if dimension == Dimension::License {
        return Some(score.license.to_string());
    }

    score.get(dimension).map(|value| format!("{value:.decimal_places$}"))
}

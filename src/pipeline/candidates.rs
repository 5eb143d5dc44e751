//! Candidate cut generation
//!
//! Candidates for an attribute are the midpoints between consecutive
//! distinct observed values. They depend only on the raw values, never on
//! cuts already committed.

use super::error::DiscretizeError;

/// Sorted, unique candidate cuts for one attribute.
///
/// An attribute with `k` distinct values yields at most `k - 1` candidates;
/// a constant attribute yields none.
pub fn candidate_cuts(attribute: &str, values: &[f64]) -> Result<Vec<f64>, DiscretizeError> {
    if let Some(row) = values.iter().position(|v| !v.is_finite()) {
        return Err(DiscretizeError::NonFiniteValue {
            attribute: attribute.to_string(),
            row,
        });
    }

    let mut distinct = values.to_vec();
    distinct.sort_by(|a, b| a.total_cmp(b));
    distinct.dedup();

    let mut cuts: Vec<f64> = distinct.windows(2).map(|w| midpoint(w[0], w[1])).collect();
    // Neighbouring floats can round to the same midpoint
    cuts.dedup();

    Ok(cuts)
}

/// Arithmetic mean of two finite values, without overflowing to infinity.
fn midpoint(a: f64, b: f64) -> f64 {
    let mid = (a + b) / 2.0;
    if mid.is_finite() {
        mid
    } else {
        a / 2.0 + b / 2.0
    }
}

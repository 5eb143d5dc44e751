//! Interval mapping
//!
//! Converts raw values into half-open interval labels `(left; right]` using an
//! attribute's frozen cut sequence. Two values get the same label iff no cut
//! separates them.

use std::fmt;

use super::separation::interval_index;

/// One end of an interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    NegInfinity,
    Cut(f64),
    Infinity,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::NegInfinity => write!(f, "-inf"),
            Bound::Infinity => write!(f, "inf"),
            // Debug keeps the decimal point on whole numbers ("2.0")
            Bound::Cut(c) => write!(f, "{:?}", c),
        }
    }
}

/// Half-open interval `(left, right]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub left: Bound,
    pub right: Bound,
}

impl Interval {
    /// The interval covering the whole real line
    pub const UNBOUNDED: Interval = Interval {
        left: Bound::NegInfinity,
        right: Bound::Infinity,
    };
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the cut-free interval is written open on the right
        let close = if *self == Interval::UNBOUNDED { ')' } else { ']' };
        write!(f, "({}; {}{}", self.left, self.right, close)
    }
}

/// Interval of `value` under a sorted cut sequence.
///
/// The first cut `>= value` is the right end; the cut before it (or -inf)
/// is the left end.
pub fn map_value(value: f64, cuts: &[f64]) -> Interval {
    let idx = interval_index(value, cuts);
    let left = if idx == 0 {
        Bound::NegInfinity
    } else {
        Bound::Cut(cuts[idx - 1])
    };
    let right = match cuts.get(idx) {
        Some(&c) => Bound::Cut(c),
        None => Bound::Infinity,
    };
    Interval { left, right }
}

/// Labels for a whole column
pub fn interval_labels(values: &[f64], cuts: &[f64]) -> Vec<String> {
    values
        .iter()
        .map(|&v| map_value(v, cuts).to_string())
        .collect()
}

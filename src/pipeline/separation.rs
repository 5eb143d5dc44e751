//! Separation oracle
//!
//! Decides whether a sorted cut sequence places two values of the same
//! attribute in different intervals. Intervals are half-open `(left, right]`:
//! a value equal to a cut belongs to the interval on its left.

/// Index of the interval a value falls into under a sorted cut sequence.
///
/// Interval `i` is `(cuts[i - 1], cuts[i]]`, with unbounded ends at
/// `0` and `cuts.len()`.
pub fn interval_index(value: f64, cuts: &[f64]) -> usize {
    cuts.partition_point(|&c| c < value)
}

/// True iff some cut `c` has one value `<= c` and the other `> c`.
///
/// `cuts` must be sorted ascending.
pub fn separates(a: f64, b: f64, cuts: &[f64]) -> bool {
    interval_index(a, cuts) != interval_index(b, cuts)
}

/// True iff a single cut splits the two values.
pub fn separated_by(a: f64, b: f64, cut: f64) -> bool {
    (a <= cut) != (b <= cut)
}

/// Separation under `committed ∪ {trial}` without building the merged sequence.
pub fn separates_with_trial(a: f64, b: f64, committed: &[f64], trial: f64) -> bool {
    separated_by(a, b, trial) || separates(a, b, committed)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Direct definition, used as a reference for the binary-search version.
    fn separates_naive(a: f64, b: f64, cuts: &[f64]) -> bool {
        cuts.iter()
            .any(|&c| (a <= c && b > c) || (b <= c && a > c))
    }

    #[test]
    fn test_value_on_cut_belongs_to_left_interval() {
        assert!(!separates(1.0, 1.5, &[1.5]));
        assert!(separates(1.5, 1.6, &[1.5]));
        assert_eq!(interval_index(1.5, &[1.5]), 0);
        assert_eq!(interval_index(1.50001, &[1.5]), 1);
    }

    #[test]
    fn test_empty_cut_set_separates_nothing() {
        assert!(!separates(-100.0, 100.0, &[]));
    }

    #[test]
    fn test_symmetric() {
        let cuts = [0.0, 2.5, 7.0];
        for &(a, b) in &[(1.0, 3.0), (3.0, 1.0), (-1.0, 0.0), (7.0, 8.0), (2.6, 6.9)] {
            assert_eq!(separates(a, b, &cuts), separates(b, a, &cuts));
        }
    }

    #[test]
    fn test_matches_naive_definition() {
        let cuts = [-1.0, 0.5, 0.75, 3.0];
        let values = [-2.0, -1.0, -0.5, 0.5, 0.6, 0.75, 1.0, 3.0, 3.5];
        for &a in &values {
            for &b in &values {
                assert_eq!(separates(a, b, &cuts), separates_naive(a, b, &cuts), "a={} b={}", a, b);
            }
        }
    }

    #[test]
    fn test_trial_cut_extends_committed_set() {
        let committed = [5.0];
        assert!(!separates(1.0, 2.0, &committed));
        assert!(separates_with_trial(1.0, 2.0, &committed, 1.5));
        assert!(separates_with_trial(4.0, 6.0, &committed, 1.5));
        assert!(!separates_with_trial(6.0, 7.0, &committed, 1.5));
    }
}

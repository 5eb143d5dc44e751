//! Discordant pair index
//!
//! Enumerates every unordered pair of rows whose decisions differ. This is
//! the fixed target set the cut selector tries to cover.

use serde::Serialize;

use super::table::TabularSource;

/// Unordered pair of row indices with different decisions, stored as `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct DiscordantPair {
    pub first: usize,
    pub second: usize,
}

impl DiscordantPair {
    /// Canonicalize two row indices into a pair (smaller index first).
    ///
    /// Returns `None` for `a == b`.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { first: a, second: b }),
            std::cmp::Ordering::Greater => Some(Self { first: b, second: a }),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Collect all discordant pairs in row order.
///
/// O(n²) decision comparisons. Tables with fewer than two rows yield an
/// empty set, which downstream treats as already fully separated.
pub fn discordant_pairs<T: TabularSource + ?Sized>(table: &T) -> Vec<DiscordantPair> {
    let n = table.row_count();
    if n < 2 {
        return Vec::new();
    }

    (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .filter(|&(i, j)| !table.same_decision(i, j))
        .filter_map(|(i, j)| DiscordantPair::new(i, j))
        .collect()
}

//! Statistics aggregation over a finished run

use serde::Serialize;

use super::engine::{Criterion, CutMap};

/// Summary of one discretization run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscretizationStats {
    /// Criterion the run used
    pub criterion: Criterion,
    /// All discordant pairs in the table
    pub total_pairs: usize,
    /// Discordant pairs separated by the final cuts
    pub separated_pairs: usize,
    /// Cuts committed across all attributes
    pub cuts_added: usize,
    /// `separated_pairs / total_pairs`, 0 when there are no pairs
    pub coverage: f64,
    /// Cut count per attribute, in attribute order
    pub cuts_per_attribute: Vec<(String, usize)>,
    /// `cuts_added / attribute_count`, 0 when there are no attributes
    pub average_cuts_per_attribute: f64,
    /// Rounds executed (one commit each)
    pub rounds: usize,
    /// False when a round budget stopped the run early
    pub converged: bool,
}

impl DiscretizationStats {
    /// Derive the record from the engine's final counters.
    pub fn aggregate(
        criterion: Criterion,
        total_pairs: usize,
        separated_pairs: usize,
        cuts: &CutMap,
        rounds: usize,
        converged: bool,
    ) -> Self {
        let cuts_per_attribute: Vec<(String, usize)> = cuts
            .iter()
            .map(|e| (e.attribute.clone(), e.cuts.len()))
            .collect();
        let cuts_added = cuts.total_cuts();

        Self {
            criterion,
            total_pairs,
            separated_pairs,
            cuts_added,
            coverage: ratio(separated_pairs, total_pairs),
            average_cuts_per_attribute: ratio(cuts_added, cuts_per_attribute.len()),
            cuts_per_attribute,
            rounds,
            converged,
        }
    }

    /// Whether every discordant pair is separated (false for an empty pair set)
    pub fn is_complete(&self) -> bool {
        self.total_pairs > 0 && self.separated_pairs == self.total_pairs
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

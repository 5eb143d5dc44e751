//! Greedy cut selection
//!
//! Each round scores every (attribute, candidate cut) combination against
//! the discordant pairs that are not yet separated, picks a winner under the
//! active [`Criterion`], and commits it. The loop stops when no candidate
//! separates a new pair, or when the caller's round budget or cut limit
//! runs out.
//!
//! Scoring only reads the selector state and may run on the rayon pool.
//! The reduction that picks the winner and the commit are sequential, so a
//! run is deterministic regardless of thread count.

use rayon::prelude::*;
use serde::Serialize;

use super::candidates::candidate_cuts;
use super::error::DiscretizeError;
use super::pairs::DiscordantPair;
use super::separation::separates_with_trial;
use super::stats::DiscretizationStats;
use super::table::TabularSource;

/// Selection rule applied to each round's scored candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Maximize newly separated pairs per round
    #[default]
    Primary,
    /// Keep per-attribute cut counts low while still making progress
    Secondary,
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Criterion::Primary => write!(f, "primary"),
            Criterion::Secondary => write!(f, "secondary"),
        }
    }
}

impl std::str::FromStr for Criterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" | "main" | "max-pairs" => Ok(Criterion::Primary),
            "secondary" | "min-intervals" => Ok(Criterion::Secondary),
            _ => Err(format!(
                "Unknown criterion: '{}'. Use 'primary' or 'secondary'.",
                s
            )),
        }
    }
}

/// Configuration for one discretization run
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Winner selection rule
    pub criterion: Criterion,
    /// Stop after this many committed cuts, leaving a partial cut set
    pub max_rounds: Option<usize>,
    /// Score candidates on the rayon pool
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            criterion: Criterion::Primary,
            max_rounds: None,
            parallel: true,
        }
    }
}

impl EngineConfig {
    pub fn new(criterion: Criterion) -> Self {
        Self {
            criterion,
            ..Default::default()
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: Option<usize>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// One committed cut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: usize,
    /// Attribute the cut was added to
    pub attribute: String,
    /// Cut value
    pub cut: f64,
    /// Pairs newly separated by this cut
    pub gain: usize,
    /// Separated pairs after the commit
    pub separated_total: usize,
}

/// Final cut sequence of a single attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeCuts {
    pub attribute: String,
    /// Strictly increasing
    pub cuts: Vec<f64>,
}

/// Frozen cut sequences for every attribute, in attribute order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CutMap {
    entries: Vec<AttributeCuts>,
}

impl CutMap {
    pub fn new(entries: Vec<AttributeCuts>) -> Self {
        Self { entries }
    }

    /// Cuts for an attribute by name
    pub fn get(&self, attribute: &str) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|e| e.attribute == attribute)
            .map(|e| e.cuts.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeCuts> {
        self.entries.iter()
    }

    /// Cuts across all attributes
    pub fn total_cuts(&self) -> usize {
        self.entries.iter().map(|e| e.cuts.len()).sum()
    }
}

/// Everything a run produces
#[derive(Debug, Clone, Serialize)]
pub struct DiscretizationRun {
    pub cuts: CutMap,
    pub trace: Vec<RoundRecord>,
    pub stats: DiscretizationStats,
}

/// Score of a candidate cut in one round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore {
    /// Attribute index
    pub attribute: usize,
    pub cut: f64,
    /// Not-yet-separated pairs this cut would separate
    pub gain: usize,
    /// Cut count of the attribute if this candidate were committed
    pub resulting_cuts: usize,
}

/// Pick the round winner from scores listed in iteration order.
///
/// Returns `None` when no candidate has a positive gain.
pub fn select_winner(criterion: Criterion, scores: &[CandidateScore]) -> Option<CandidateScore> {
    let mut best: Option<CandidateScore> = None;

    for score in scores.iter().filter(|s| s.gain > 0) {
        let better = match best {
            None => true,
            Some(current) => match criterion {
                Criterion::Primary => score.gain > current.gain,
                // Fewer resulting cuts wins, then larger gain. Later candidates
                // never displace an equal one.
                Criterion::Secondary => {
                    score.resulting_cuts < current.resulting_cuts
                        || (score.resulting_cuts == current.resulting_cuts
                            && score.gain > current.gain)
                }
            },
        };
        if better {
            best = Some(*score);
        }
    }

    best
}

/// Mutable state of one greedy run
pub struct CutSelector<'a, T: TabularSource + Sync + ?Sized> {
    table: &'a T,
    pairs: &'a [DiscordantPair],
    config: EngineConfig,
    candidates: Vec<Vec<f64>>,
    cuts: Vec<Vec<f64>>,
    separated: Vec<bool>,
    separated_count: usize,
    cut_limit: Option<usize>,
    trace: Vec<RoundRecord>,
}

impl<'a, T: TabularSource + Sync + ?Sized> CutSelector<'a, T> {
    /// Prepare a run. Fails if any attribute holds a non-finite value.
    pub fn new(
        table: &'a T,
        pairs: &'a [DiscordantPair],
        config: EngineConfig,
    ) -> Result<Self, DiscretizeError> {
        let names = table.attribute_names();

        // Candidates depend only on raw values, so one pass serves every round
        let candidates = names
            .iter()
            .enumerate()
            .map(|(attr, name)| candidate_cuts(name, table.attribute_values(attr)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            table,
            pairs,
            config,
            candidates,
            cuts: vec![Vec::new(); names.len()],
            separated: vec![false; pairs.len()],
            separated_count: 0,
            cut_limit: None,
            trace: Vec::new(),
        })
    }

    /// Stop once `limit` cuts are committed, marking the run as not converged.
    pub fn with_cut_limit(mut self, limit: usize) -> Self {
        self.cut_limit = Some(limit);
        self
    }

    /// Indices of pairs not yet separated
    fn pending_pairs(&self) -> Vec<usize> {
        self.separated
            .iter()
            .enumerate()
            .filter(|(_, &done)| !done)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Gain of adding `cut` to an attribute's committed cuts
    fn gain(&self, attribute: usize, cut: f64, pending: &[usize]) -> usize {
        let table = self.table;
        let values = table.attribute_values(attribute);
        let committed = &self.cuts[attribute];

        pending
            .iter()
            .filter(|&&idx| {
                let pair = self.pairs[idx];
                separates_with_trial(values[pair.first], values[pair.second], committed, cut)
            })
            .count()
    }

    /// Score every candidate of every attribute, in iteration order.
    pub fn score_round(&self) -> Vec<CandidateScore> {
        let pending = self.pending_pairs();

        let work: Vec<(usize, f64)> = self
            .candidates
            .iter()
            .enumerate()
            .flat_map(|(attr, cuts)| cuts.iter().map(move |&cut| (attr, cut)))
            .collect();

        let score = |&(attribute, cut): &(usize, f64)| CandidateScore {
            attribute,
            cut,
            gain: self.gain(attribute, cut, &pending),
            resulting_cuts: self.cuts[attribute].len() + 1,
        };

        if self.config.parallel {
            work.par_iter().map(score).collect()
        } else {
            work.iter().map(score).collect()
        }
    }

    /// Commit a winning candidate and mark the pairs it separates.
    fn commit(&mut self, winner: CandidateScore) -> RoundRecord {
        let attr = winner.attribute;
        let table = self.table;
        let values = table.attribute_values(attr);
        let committed = &self.cuts[attr];

        let mut newly = 0;
        for (idx, pair) in self.pairs.iter().enumerate() {
            if !self.separated[idx]
                && separates_with_trial(values[pair.first], values[pair.second], committed, winner.cut)
            {
                self.separated[idx] = true;
                newly += 1;
            }
        }
        self.separated_count += newly;

        let cuts = &mut self.cuts[attr];
        if let Err(pos) = cuts.binary_search_by(|c| c.total_cmp(&winner.cut)) {
            cuts.insert(pos, winner.cut);
        }

        let record = RoundRecord {
            round: self.trace.len() + 1,
            attribute: table.attribute_names()[attr].clone(),
            cut: winner.cut,
            gain: newly,
            separated_total: self.separated_count,
        };
        self.trace.push(record.clone());
        record
    }

    /// Run to convergence (or the round budget or cut limit), reporting each commit.
    pub fn run_with_observer<F>(mut self, mut observer: F) -> DiscretizationRun
    where
        F: FnMut(&RoundRecord),
    {
        let converged = loop {
            let scores = self.score_round();
            let Some(winner) = select_winner(self.config.criterion, &scores) else {
                break true;
            };
            let committed = self.trace.len();
            if self.config.max_rounds.is_some_and(|limit| committed >= limit)
                || self.cut_limit.is_some_and(|limit| committed >= limit)
            {
                break false;
            }

            let record = self.commit(winner);
            observer(&record);
        };

        self.finish(converged)
    }

    /// Run to convergence (or the round budget).
    pub fn run(self) -> DiscretizationRun {
        self.run_with_observer(|_| {})
    }

    fn finish(self, converged: bool) -> DiscretizationRun {
        let table = self.table;
        let names = table.attribute_names();
        let cuts = CutMap::new(
            names
                .iter()
                .zip(self.cuts)
                .map(|(attribute, cuts)| AttributeCuts {
                    attribute: attribute.clone(),
                    cuts,
                })
                .collect(),
        );

        let stats = DiscretizationStats::aggregate(
            self.config.criterion,
            self.pairs.len(),
            self.separated_count,
            &cuts,
            self.trace.len(),
            converged,
        );

        DiscretizationRun {
            cuts,
            trace: self.trace,
            stats,
        }
    }
}

//! Pipeline module - loading, validation and the discretization engine

pub mod candidates;
pub mod discretize;
pub mod engine;
pub mod error;
pub mod intervals;
pub mod loader;
pub mod pairs;
pub mod separation;
pub mod stats;
pub mod table;

pub use candidates::candidate_cuts;
pub use discretize::*;
pub use engine::{
    select_winner, AttributeCuts, CandidateScore, Criterion, CutMap, CutSelector,
    DiscretizationRun, EngineConfig, RoundRecord,
};
pub use error::DiscretizeError;
pub use intervals::{interval_labels, map_value, Bound, Interval};
pub use loader::*;
pub use pairs::{discordant_pairs, DiscordantPair};
pub use separation::{interval_index, separates};
pub use stats::DiscretizationStats;
pub use table::{DecisionTable, TabularSource};

//! Report module - summarizing discretization results

pub mod stats_export;
pub mod summary;

pub use stats_export::*;
pub use summary::*;

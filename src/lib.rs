//! Roughcut: Supervised Discretization Library
//!
//! Discretizes numeric attributes of a decision table into intervals chosen
//! greedily to keep rows with different decisions distinguishable
//! (rough-set discernibility).

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;

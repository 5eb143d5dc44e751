//! JSON export of discretization statistics and cut sets

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{CutMap, DiscretizationRun, DiscretizationStats, RoundRecord};

/// Metadata about the export
#[derive(Debug, Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the export (ISO 8601 format)
    pub timestamp: String,
    /// Roughcut version
    pub roughcut_version: String,
    /// Input file path
    pub input_file: String,
    /// Decision column name
    pub decision_column: String,
    /// Row count of the input table
    pub rows: usize,
    /// Round budget, if one was set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rounds: Option<usize>,
}

/// One run's results
#[derive(Debug, Serialize)]
pub struct RunExport<'a> {
    pub statistics: &'a DiscretizationStats,
    pub cuts: &'a CutMap,
    pub trace: &'a [RoundRecord],
}

impl<'a> From<&'a DiscretizationRun> for RunExport<'a> {
    fn from(run: &'a DiscretizationRun) -> Self {
        Self {
            statistics: &run.stats,
            cuts: &run.cuts,
            trace: &run.trace,
        }
    }
}

/// Complete export document
#[derive(Debug, Serialize)]
pub struct StatsExport<'a> {
    pub metadata: ExportMetadata,
    pub runs: Vec<RunExport<'a>>,
}

/// Parameters describing the run context
pub struct ExportParams<'a> {
    pub input_file: &'a str,
    pub decision_column: &'a str,
    pub rows: usize,
    pub max_rounds: Option<usize>,
}

/// Build the export document for one or more runs
pub fn build_stats_export<'a>(runs: &'a [&'a DiscretizationRun], params: &ExportParams) -> StatsExport<'a> {
    StatsExport {
        metadata: ExportMetadata {
            timestamp: Utc::now().to_rfc3339(),
            roughcut_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: params.input_file.to_string(),
            decision_column: params.decision_column.to_string(),
            rows: params.rows,
            max_rounds: params.max_rounds,
        },
        runs: runs.iter().map(|run| RunExport::from(*run)).collect(),
    }
}

/// Write statistics, cut sets and traces to a JSON file
pub fn export_stats_json(
    runs: &[&DiscretizationRun],
    output_path: &Path,
    params: &ExportParams,
) -> Result<()> {
    let export = build_stats_export(runs, params);

    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize discretization statistics to JSON")?;

    std::fs::write(output_path, json).with_context(|| {
        format!(
            "Failed to write discretization statistics to {}",
            output_path.display()
        )
    })?;

    Ok(())
}

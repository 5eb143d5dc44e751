//! End-to-end discretization: table → discordant pairs → cut selector →
//! interval labels + statistics

use polars::prelude::*;

use super::engine::{Criterion, CutMap, CutSelector, DiscretizationRun, EngineConfig, RoundRecord};
use super::error::DiscretizeError;
use super::intervals::interval_labels;
use super::pairs::discordant_pairs;
use super::stats::DiscretizationStats;
use super::table::{DecisionTable, TabularSource};

/// Run the cut selector over a table.
pub fn discretize_table<T>(table: &T, config: &EngineConfig) -> Result<DiscretizationRun, DiscretizeError>
where
    T: TabularSource + Sync + ?Sized,
{
    discretize_table_with_observer(table, config, |_| {})
}

/// Run the cut selector, calling `observer` after every committed cut.
///
/// A secondary run never commits more cuts than a primary run on the same
/// table, so it first measures the primary cut count and stops there.
pub fn discretize_table_with_observer<T, F>(
    table: &T,
    config: &EngineConfig,
    observer: F,
) -> Result<DiscretizationRun, DiscretizeError>
where
    T: TabularSource + Sync + ?Sized,
    F: FnMut(&RoundRecord),
{
    let pairs = discordant_pairs(table);
    let selector = CutSelector::new(table, &pairs, config.clone())?;

    let selector = match config.criterion {
        Criterion::Primary => selector,
        Criterion::Secondary => {
            let primary = with_criterion(config, Criterion::Primary);
            let reference = CutSelector::new(table, &pairs, primary)?.run();
            selector.with_cut_limit(reference.stats.cuts_added)
        }
    };

    Ok(selector.run_with_observer(observer))
}

/// Run both criteria on one shared pair index.
///
/// Returns `(primary, secondary)`. `base` supplies every setting except the criterion.
pub fn compare_criteria<T>(
    table: &T,
    base: &EngineConfig,
) -> Result<(DiscretizationRun, DiscretizationRun), DiscretizeError>
where
    T: TabularSource + Sync + ?Sized,
{
    compare_criteria_with_observer(table, base, |_, _| {})
}

/// [`compare_criteria`] with an observer told which run each commit belongs to.
///
/// The primary run goes first; its cut count caps the secondary run.
pub fn compare_criteria_with_observer<T, F>(
    table: &T,
    base: &EngineConfig,
    mut observer: F,
) -> Result<(DiscretizationRun, DiscretizationRun), DiscretizeError>
where
    T: TabularSource + Sync + ?Sized,
    F: FnMut(Criterion, &RoundRecord),
{
    let pairs = discordant_pairs(table);

    let primary = CutSelector::new(table, &pairs, with_criterion(base, Criterion::Primary))?
        .run_with_observer(|record| observer(Criterion::Primary, record));

    let secondary = CutSelector::new(table, &pairs, with_criterion(base, Criterion::Secondary))?
        .with_cut_limit(primary.stats.cuts_added)
        .run_with_observer(|record| observer(Criterion::Secondary, record));

    Ok((primary, secondary))
}

fn with_criterion(base: &EngineConfig, criterion: Criterion) -> EngineConfig {
    EngineConfig {
        criterion,
        ..base.clone()
    }
}

/// Replace every attribute column of `df` with interval labels.
///
/// Column order and names are kept; the decision column is passed through.
pub fn label_dataframe(
    df: &DataFrame,
    table: &DecisionTable,
    cuts: &CutMap,
) -> Result<DataFrame, DiscretizeError> {
    let names = table.attribute_names();
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());

    for col in df.get_columns() {
        let name = col.name().as_str();
        if name == table.decision_name() {
            columns.push(col.clone());
            continue;
        }

        let attr = names.iter().position(|n| n == name).ok_or_else(|| {
            DiscretizeError::MalformedTable(format!("column '{}' is not an attribute of the table", name))
        })?;
        let attr_cuts = cuts.get(name).unwrap_or(&[]);
        let labels = interval_labels(table.attribute_values(attr), attr_cuts);
        columns.push(Column::new(col.name().clone(), labels));
    }

    Ok(DataFrame::new(columns)?)
}

/// Discretize a DataFrame in one call.
///
/// The decision column defaults to the last column.
pub fn discretize_dataframe(
    df: &DataFrame,
    decision: Option<&str>,
    config: &EngineConfig,
) -> Result<(DataFrame, DiscretizationStats), DiscretizeError> {
    let table = DecisionTable::from_dataframe(df, decision)?;
    let run = discretize_table(&table, config)?;
    let labeled = label_dataframe(df, &table, &run.cuts)?;
    Ok((labeled, run.stats))
}

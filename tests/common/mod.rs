//! Shared test utilities and fixture generators
#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

use roughcut::pipeline::DecisionTable;

/// Two clean clusters on one attribute; a single cut at 1.55 separates them.
pub fn create_two_cluster_dataframe() -> DataFrame {
    df! {
        "attr1" => [1.0f64, 2.0, 1.1, 2.1],
        "decision" => ["A", "B", "A", "B"],
    }
    .unwrap()
}

/// Alternating decisions on two monotone attributes
///
/// - `attr1`: 1..=8
/// - `attr2`: 0.5..=7.5, same order as attr1
/// - `decision`: A/B alternating, so every neighbour pair is discordant
pub fn create_alternating_dataframe() -> DataFrame {
    df! {
        "attr1" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        "attr2" => [0.5f64, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5],
        "decision" => ["A", "B", "A", "B", "A", "B", "A", "B"],
    }
    .unwrap()
}

/// Five rows, two attributes, alternating decisions
pub fn create_basic_dataframe() -> DataFrame {
    df! {
        "attr1" => [1.0f64, 2.0, 3.0, 4.0, 5.0],
        "attr2" => [0.5f64, 1.5, 2.5, 3.5, 4.5],
        "decision" => ["A", "B", "A", "B", "A"],
    }
    .unwrap()
}

/// Every row shares the same decision
pub fn create_concordant_dataframe() -> DataFrame {
    df! {
        "attr1" => [1.0f64, 2.0, 3.0, 4.0],
        "attr2" => [9.0f64, 8.0, 7.0, 6.0],
        "decision" => ["A", "A", "A", "A"],
    }
    .unwrap()
}

/// Three-class table where one attribute is informative and one is constant
pub fn create_multiclass_dataframe() -> DataFrame {
    df! {
        "sepal" => [4.9f64, 5.1, 5.0, 6.4, 6.9, 6.5, 7.7, 7.9, 7.2],
        "flat" => [1.0f64, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        "petal" => [0.2f64, 0.3, 0.2, 1.5, 1.4, 1.3, 2.3, 2.0, 2.1],
        "species" => ["setosa", "setosa", "setosa", "versicolor", "versicolor", "versicolor",
                      "virginica", "virginica", "virginica"],
    }
    .unwrap()
}

/// Random table with a binary decision
pub fn create_random_dataframe(rows: usize, attributes: usize, seed: u64) -> DataFrame {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let mut columns: Vec<Column> = Vec::with_capacity(attributes + 1);
    for i in 0..attributes {
        let values: Vec<f64> = (0..rows).map(|_| rng.gen::<f64>()).collect();
        columns.push(Column::new(format!("attr{}", i + 1).into(), values));
    }
    let decisions: Vec<&str> = (0..rows)
        .map(|_| if rng.gen_bool(0.5) { "A" } else { "B" })
        .collect();
    columns.push(Column::new("decision".into(), decisions));

    DataFrame::new(columns).unwrap()
}

/// Decision table from a DataFrame whose last column is the decision
pub fn table_from(df: &DataFrame) -> DecisionTable {
    DecisionTable::from_dataframe(df, None).unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Distinct string values of a column, sorted
pub fn distinct_labels(df: &DataFrame, column: &str) -> Vec<String> {
    let mut labels: Vec<String> = df
        .column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_no_null_iter()
        .map(|s| s.to_string())
        .collect();
    labels.sort();
    labels.dedup();
    labels
}

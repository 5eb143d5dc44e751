//! Command-line argument definitions using clap

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::pipeline::{Criterion, FileFormat};

/// Which criteria to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionChoice {
    Single(Criterion),
    /// Run primary and secondary side by side
    Both,
}

impl std::fmt::Display for CriterionChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CriterionChoice::Single(c) => write!(f, "{}", c),
            CriterionChoice::Both => write!(f, "primary + secondary"),
        }
    }
}

impl std::str::FromStr for CriterionChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("both") {
            return Ok(CriterionChoice::Both);
        }
        s.parse::<Criterion>()
            .map(CriterionChoice::Single)
            .map_err(|_| format!("Unknown criterion: '{}'. Use 'primary', 'secondary' or 'both'.", s))
    }
}

/// Roughcut - Discretize numeric attributes while keeping different decisions apart
#[derive(Parser, Debug)]
#[command(name = "roughcut")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Decision (label) column name.
    /// Defaults to the last column of the dataset.
    #[arg(short, long)]
    pub decision: Option<String>,

    /// Cut selection criterion.
    /// Options: "primary" (maximize separated pairs per round),
    /// "secondary" (fewest cuts per attribute while still making progress),
    /// or "both" (run each independently and compare, default)
    #[arg(short, long, default_value = "both")]
    pub criterion: CriterionChoice,

    /// Output directory for discretized files.
    /// Defaults to the input directory. Files are named
    /// '<stem>_<criterion>_discretized.<ext>' (e.g., data.csv → data_primary_discretized.csv).
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Also write statistics, cut sets and round traces to '<stem>_discretization_stats.json'
    #[arg(long, default_value = "false")]
    pub stats_json: bool,

    /// Stop after this many committed cuts and keep the partial cut set.
    /// Default: run until no cut separates a new pair.
    #[arg(long, value_parser = validate_max_rounds)]
    pub max_rounds: Option<usize>,

    /// Score candidate cuts on a single thread
    #[arg(long, default_value = "false")]
    pub sequential: bool,

    /// Number of worker threads for candidate scoring (0 = one per CPU core)
    #[arg(long, default_value = "0")]
    pub threads: usize,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,
}

impl Cli {
    /// Directory outputs are written to
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| {
            self.input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."))
                .to_path_buf()
        })
    }

    fn input_stem(&self) -> &str {
        self.input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output")
    }

    /// Discretized output path for a criterion, keeping the input's extension
    pub fn output_path(&self, criterion: Criterion) -> PathBuf {
        let extension = FileFormat::from_path(&self.input)
            .map(|f| f.extension())
            .unwrap_or("csv");
        self.output_dir().join(format!(
            "{}_{}_discretized.{}",
            self.input_stem(),
            criterion,
            extension
        ))
    }

    /// Path of the JSON statistics export
    pub fn stats_path(&self) -> PathBuf {
        self.output_dir()
            .join(format!("{}_discretization_stats.json", self.input_stem()))
    }
}

/// Validator for max_rounds parameter
fn validate_max_rounds(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value == 0 {
        Err("max_rounds must be at least 1".to_string())
    } else {
        Ok(value)
    }
}

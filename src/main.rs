//! Roughcut: Supervised Discretization CLI Tool
//!
//! Loads a decision table, selects cut points greedily for every numeric
//! attribute, and writes the interval-labelled table plus statistics.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use roughcut::cli::{confirm_overwrite, Cli, CriterionChoice};
use roughcut::pipeline::{
    compare_criteria_with_observer, discretize_table_with_observer, label_dataframe,
    load_dataset_with_progress, save_dataset, DecisionTable, DiscretizationRun, EngineConfig,
    TabularSource,
};
use roughcut::report::{export_stats_json, print_comparison, DiscretizationSummary, ExportParams};
use roughcut::utils::{
    create_round_spinner, finish_with_success, finish_with_warning, format_cut_added,
    print_banner, print_completion, print_config, print_count, print_info, print_step_header,
    print_step_time, print_success, print_warning,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure the worker thread pool")?;
    }

    let output_dir = cli.output_dir();

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    print_config(
        &cli.input,
        cli.decision.as_deref().unwrap_or("(last column)"),
        &output_dir,
        &cli.criterion.to_string(),
        cli.max_rounds,
    );

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");

    let step_start = Instant::now();
    let (df, rows, cols, memory_mb) = load_dataset_with_progress(&cli.input, cli.infer_schema_length)?;
    print_success("Dataset loaded");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);
    print_step_time(step_start.elapsed());

    // Step 2: Validate the decision table
    print_step_header(2, "Validate Decision Table");

    let step_start = Instant::now();
    let table = DecisionTable::from_dataframe(&df, cli.decision.as_deref())
        .with_context(|| format!("Cannot discretize '{}'", cli.input.display()))?;

    print_count("numeric attribute(s)", table.attribute_count(), None);
    print_count(
        "decision class(es)",
        table.decision_classes().len(),
        Some(&format!("(column '{}')", table.decision_name())),
    );
    if table.decision_classes().len() < 2 {
        print_warning("All rows share one decision; no cuts will be added");
    }
    print_success("Decision table is valid");
    print_step_time(step_start.elapsed());

    // Step 3: Cut selection
    print_step_header(3, "Cut Selection");

    let step_start = Instant::now();
    let base = EngineConfig::default()
        .with_max_rounds(cli.max_rounds)
        .with_parallel(!cli.sequential);

    let spinner = create_round_spinner("Scoring candidate cuts...");
    let runs: Vec<DiscretizationRun> = match cli.criterion {
        CriterionChoice::Both => {
            let (primary, secondary) = compare_criteria_with_observer(&table, &base, |criterion, record| {
                spinner.set_message(format_cut_added(&criterion.to_string(), record));
            })?;
            vec![primary, secondary]
        }
        CriterionChoice::Single(criterion) => {
            let config = EngineConfig { criterion, ..base };
            let label = criterion.to_string();
            let run = discretize_table_with_observer(&table, &config, |record| {
                spinner.set_message(format_cut_added(&label, record));
            })?;
            vec![run]
        }
    };

    if runs.iter().all(|run| run.stats.converged) {
        finish_with_success(&spinner, "Cut selection converged");
    } else {
        finish_with_warning(&spinner, "Stopped before convergence; some cut sets are partial");
    }

    for run in &runs {
        println!(
            "      {} {} cut(s), {}/{} pairs separated",
            style(format!("[{}]", run.stats.criterion)).cyan(),
            style(run.stats.cuts_added).yellow().bold(),
            run.stats.separated_pairs,
            run.stats.total_pairs
        );
    }
    if runs.iter().any(|run| run.stats.total_pairs == 0) {
        print_info("No discordant pairs; every attribute maps to (-inf; inf)");
    }
    print_step_time(step_start.elapsed());

    // Step 4: Save output
    print_step_header(4, "Save Results");

    let step_start = Instant::now();
    let mut targets: Vec<_> = runs
        .iter()
        .map(|run| cli.output_path(run.stats.criterion))
        .collect();
    if cli.stats_json {
        targets.push(cli.stats_path());
    }

    let existing: Vec<_> = targets.iter().filter(|p| p.exists()).cloned().collect();
    if !existing.is_empty() && !cli.no_confirm && !confirm_overwrite(&existing)? {
        println!("Cancelled by user.");
        return Ok(());
    }

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    for run in &runs {
        let path = cli.output_path(run.stats.criterion);
        let mut labeled = label_dataframe(&df, &table, &run.cuts)?;
        save_dataset(&mut labeled, &path)?;
        print_success(&format!("Saved {}", path.display()));
    }

    if cli.stats_json {
        let path = cli.stats_path();
        let input_file = cli.input.display().to_string();
        let params = ExportParams {
            input_file: &input_file,
            decision_column: table.decision_name(),
            rows,
            max_rounds: cli.max_rounds,
        };
        let refs: Vec<&DiscretizationRun> = runs.iter().collect();
        export_stats_json(&refs, &path, &params)?;
        print_success(&format!("Saved {}", path.display()));
    }
    print_step_time(step_start.elapsed());

    // Display summaries
    for run in &runs {
        DiscretizationSummary::new(run).display();
    }
    if let [primary, secondary] = runs.as_slice() {
        print_comparison(&primary.stats, &secondary.stats);
    }

    print_completion();

    Ok(())
}

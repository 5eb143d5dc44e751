//! Discretization summary tables

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::{DiscretizationRun, DiscretizationStats};

/// Terminal summary of a finished run
#[derive(Debug)]
pub struct DiscretizationSummary<'a> {
    pub run: &'a DiscretizationRun,
}

impl<'a> DiscretizationSummary<'a> {
    pub fn new(run: &'a DiscretizationRun) -> Self {
        Self { run }
    }

    /// Overview table: pairs, coverage, cuts
    pub fn overview_table(&self) -> Table {
        let stats = &self.run.stats;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("🔀 Discordant Pairs"), Cell::new(stats.total_pairs)]);
        table.add_row(vec![Cell::new("✂️  Separated Pairs"), Cell::new(stats.separated_pairs)]);
        table.add_row(vec![
            Cell::new("🎯 Coverage"),
            Cell::new(format!("{:.1}%", stats.coverage * 100.0))
                .fg(coverage_color(stats))
                .add_attribute(Attribute::Bold),
        ]);
        table.add_row(vec![Cell::new("📏 Cuts Added"), Cell::new(stats.cuts_added)]);
        table.add_row(vec![
            Cell::new("📊 Avg Cuts / Attribute"),
            Cell::new(format!("{:.2}", stats.average_cuts_per_attribute)),
        ]);
        table.add_row(vec![
            Cell::new("🔁 Rounds"),
            Cell::new(if stats.converged {
                stats.rounds.to_string()
            } else {
                format!("{} (stopped early)", stats.rounds)
            })
            .fg(if stats.converged { Color::White } else { Color::Yellow }),
        ]);

        table
    }

    /// Per-attribute cut table
    pub fn cuts_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Attribute").add_attribute(Attribute::Bold),
            Cell::new("Cuts").add_attribute(Attribute::Bold),
            Cell::new("Cut points").add_attribute(Attribute::Bold),
        ]);

        for entry in self.run.cuts.iter() {
            let points = if entry.cuts.is_empty() {
                "-".to_string()
            } else {
                entry
                    .cuts
                    .iter()
                    .map(|c| format!("{:?}", c))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            table.add_row(vec![
                Cell::new(&entry.attribute),
                Cell::new(entry.cuts.len()).set_alignment(CellAlignment::Right),
                Cell::new(points).fg(if entry.cuts.is_empty() {
                    Color::DarkGrey
                } else {
                    Color::Cyan
                }),
            ]);
        }

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style(format!(
                "DISCRETIZATION SUMMARY ({})",
                self.run.stats.criterion.to_string().to_uppercase()
            ))
            .white()
            .bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();
        print_indented(&self.overview_table());

        println!();
        println!(
            "    {} {}",
            style("📝").cyan(),
            style("CUTS PER ATTRIBUTE").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();
        print_indented(&self.cuts_table());
    }
}

/// Side-by-side table of the primary and secondary runs
pub fn comparison_table(primary: &DiscretizationStats, secondary: &DiscretizationStats) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Primary").add_attribute(Attribute::Bold),
        Cell::new("Secondary").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![
        Cell::new("Separated Pairs"),
        Cell::new(primary.separated_pairs),
        Cell::new(secondary.separated_pairs),
    ]);
    table.add_row(vec![
        Cell::new("Coverage"),
        Cell::new(format!("{:.1}%", primary.coverage * 100.0)),
        Cell::new(format!("{:.1}%", secondary.coverage * 100.0)),
    ]);

    let (p_color, s_color) = match primary.cuts_added.cmp(&secondary.cuts_added) {
        std::cmp::Ordering::Less => (Color::Green, Color::White),
        std::cmp::Ordering::Greater => (Color::White, Color::Green),
        std::cmp::Ordering::Equal => (Color::White, Color::White),
    };
    table.add_row(vec![
        Cell::new("Cuts Added"),
        Cell::new(primary.cuts_added).fg(p_color),
        Cell::new(secondary.cuts_added).fg(s_color),
    ]);
    table.add_row(vec![
        Cell::new("Avg Cuts / Attribute"),
        Cell::new(format!("{:.2}", primary.average_cuts_per_attribute)),
        Cell::new(format!("{:.2}", secondary.average_cuts_per_attribute)),
    ]);

    table
}

/// Print the criterion comparison
pub fn print_comparison(primary: &DiscretizationStats, secondary: &DiscretizationStats) {
    println!();
    println!(
        "    {} {}",
        style("⚖️ ").cyan(),
        style("CRITERION COMPARISON").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();
    print_indented(&comparison_table(primary, secondary));
}

fn coverage_color(stats: &DiscretizationStats) -> Color {
    if stats.is_complete() {
        Color::Green
    } else if stats.coverage >= 0.9 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{discretize_table, DecisionTable, EngineConfig};

    fn sample_run() -> DiscretizationRun {
        let table = DecisionTable::new(
            vec!["width".to_string(), "flat".to_string()],
            vec![vec![1.0, 2.0, 1.1, 2.1], vec![0.0; 4]],
            "d",
            ["A", "B", "A", "B"].iter().map(|s| s.to_string()).collect(),
        )
        .unwrap();
        discretize_table(&table, &EngineConfig::default()).unwrap()
    }

    #[test]
    fn test_overview_table_shows_coverage() {
        let run = sample_run();
        let rendered = DiscretizationSummary::new(&run).overview_table().to_string();
        assert!(rendered.contains("100.0%"));
        assert!(rendered.contains("Cuts Added"));
    }

    #[test]
    fn test_cuts_table_lists_every_attribute() {
        let run = sample_run();
        let rendered = DiscretizationSummary::new(&run).cuts_table().to_string();
        assert!(rendered.contains("width"));
        assert!(rendered.contains("1.55"));
        assert!(rendered.contains("flat"));
    }

    #[test]
    fn test_comparison_table_has_both_columns() {
        let run = sample_run();
        let rendered = comparison_table(&run.stats, &run.stats).to_string();
        assert!(rendered.contains("Primary"));
        assert!(rendered.contains("Secondary"));
    }
}

//! Run summary report generation

use std::path::PathBuf;
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of a plotting run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows_loaded: usize,
    pub rows_after_filter: usize,
    pub category_rows: usize,
    pub saved_figures: Vec<PathBuf>,
    pub load_time: Duration,
    pub catplot_time: Duration,
    pub heatmap_time: Duration,
}

impl RunSummary {
    pub fn new(rows_loaded: usize) -> Self {
        Self {
            rows_loaded,
            rows_after_filter: rows_loaded,
            ..Default::default()
        }
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RUN SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Rows loaded"),
            Cell::new(self.rows_loaded),
        ]);

        let dropped = self.rows_loaded.saturating_sub(self.rows_after_filter);
        table.add_row(vec![
            Cell::new("🗑️  Rows dropped by filters"),
            Cell::new(dropped).fg(if dropped == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("🔗 Rows in heat map"),
            Cell::new(self.rows_after_filter).fg(Color::Green),
        ]);

        table.add_row(vec![
            Cell::new("📊 Counted category triples"),
            Cell::new(self.category_rows),
        ]);

        table.add_row(vec![
            Cell::new("✅ Figures saved"),
            Cell::new(self.saved_figures.len())
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        let kept_pct = if self.rows_loaded > 0 {
            self.rows_after_filter as f64 / self.rows_loaded as f64 * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            Cell::new("📉 Heat-map row retention"),
            Cell::new(format!("{:.1}%", kept_pct)).fg(if kept_pct >= 90.0 {
                Color::Green
            } else {
                Color::Yellow
            }),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        if !self.saved_figures.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("🖼️").cyan(),
                style("FIGURES").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            for figure in &self.saved_figures {
                println!("      {} {}", style("•").dim(), figure.display());
            }
        }
    }
}

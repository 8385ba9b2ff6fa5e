//! Grouped bar chart of categorical feature counts, one panel per outcome

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::pipeline::{CategoryCount, CATEGORICAL_FEATURES};

const FIGURE_SIZE: (u32, u32) = (1100, 550);
const BAR_WIDTH: f64 = 0.35;

// Bar hues for value = 0 and value = 1
const BAR_COLORS: [RGBColor; 2] = [RGBColor(86, 119, 252), RGBColor(252, 152, 86)];

/// Renderable categorical distribution figure.
///
/// Holds the counted (cardio, variable, value) rows; `save` serializes the
/// figure as a static SVG with one panel per cardio outcome.
#[derive(Debug, Clone)]
pub struct CatPlot {
    counts: Vec<CategoryCount>,
}

impl CatPlot {
    pub fn new(counts: Vec<CategoryCount>) -> Self {
        Self { counts }
    }

    pub fn counts(&self) -> &[CategoryCount] {
        &self.counts
    }

    /// Serialize the figure to an SVG file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let y_max = self.counts.iter().map(|c| c.total).max().unwrap_or(1) as f64 * 1.1;
        let n_features = CATEGORICAL_FEATURES.len();
        let panels = root.split_evenly((1, 2));

        for (panel_idx, panel) in panels.iter().enumerate() {
            let cardio = panel_idx as i64;
            let mut chart = ChartBuilder::on(panel)
                .margin(15)
                .caption(format!("cardio = {}", cardio), ("sans-serif", 20))
                .x_label_area_size(40)
                .y_label_area_size(55)
                .build_cartesian_2d(-0.6..(n_features as f64 - 0.4), 0.0..y_max)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(n_features + 1)
                .x_label_formatter(&feature_label)
                .x_desc("variable")
                .y_desc("total")
                .draw()?;

            for value in 0..=1i64 {
                let color = BAR_COLORS[value as usize];
                let bars: Vec<Rectangle<(f64, f64)>> = self
                    .counts
                    .iter()
                    .filter(|c| c.cardio == cardio && c.value == value)
                    .filter_map(|c| {
                        let feature_idx =
                            CATEGORICAL_FEATURES.iter().position(|f| *f == c.variable)?;
                        let x0 = feature_idx as f64 - BAR_WIDTH + value as f64 * BAR_WIDTH;
                        Some(Rectangle::new(
                            [(x0, 0.0), (x0 + BAR_WIDTH, c.total as f64)],
                            color.filled(),
                        ))
                    })
                    .collect();

                chart
                    .draw_series(bars)?
                    .label(format!("{}", value))
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                    });
            }

            chart
                .configure_series_labels()
                .border_style(&BLACK)
                .background_style(&WHITE.mix(0.8))
                .draw()?;
        }

        root.present()
            .with_context(|| format!("Failed to write catplot: {}", path.display()))?;
        Ok(())
    }
}

/// Map an integer x tick back to the feature name; fractional ticks stay
/// unlabeled.
fn feature_label(x: &f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    CATEGORICAL_FEATURES
        .get(idx as usize)
        .map(|s| s.to_string())
        .unwrap_or_default()
}

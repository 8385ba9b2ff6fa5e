//! Annotated lower-triangle correlation heat map

use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::pipeline::CorrelationMatrix;

const FIGURE_SIZE: (u32, u32) = (920, 800);
const COLOR_BAR_WIDTH: u32 = 120;
const COLOR_BAR_STEPS: usize = 64;

// Diverging endpoints, centered at white for 0
const NEGATIVE_END: (u8, u8, u8) = (33, 102, 172);
const POSITIVE_END: (u8, u8, u8) = (178, 24, 43);

/// Renderable correlation heat-map figure.
///
/// Only the strictly-lower triangle is drawn; the upper triangle and the
/// all-1.0 diagonal are masked out. Cell values are annotated to one
/// decimal place.
pub struct HeatMap {
    matrix: CorrelationMatrix,
}

impl HeatMap {
    pub fn new(matrix: CorrelationMatrix) -> Self {
        Self { matrix }
    }

    pub fn matrix(&self) -> &CorrelationMatrix {
        &self.matrix
    }

    /// Serialize the figure to an SVG file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let n = self.matrix.size();
        let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let (plot_area, bar_area) = root.split_horizontally((FIGURE_SIZE.0 - COLOR_BAR_WIDTH) as i32);
        let columns = self.matrix.columns.clone();

        let mut chart = ChartBuilder::on(&plot_area)
            .margin(20)
            .caption("Correlation matrix", ("sans-serif", 22))
            .x_label_area_size(50)
            .y_label_area_size(90)
            // Reversed y range puts row 0 at the top
            .build_cartesian_2d(0.0..n as f64, n as f64..0.0)?;

        let (plot_w, _) = plot_area.dim_in_pixel();
        let half_cell = (plot_w.saturating_sub(130) / n.max(1) as u32 / 2) as i32;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(n + 1)
            .y_labels(n + 1)
            .x_label_offset(half_cell)
            .x_label_formatter(&|x| column_label(&columns, *x))
            .y_label_formatter(&|y| column_label(&columns, *y))
            .draw()?;

        let cells = self.matrix.lower_triangle_cells();

        chart.draw_series(cells.iter().map(|&(i, j, v)| {
            Rectangle::new(
                [(j as f64, i as f64), ((j + 1) as f64, (i + 1) as f64)],
                diverging_color(v).filled(),
            )
        }))?;

        // Cell borders
        chart.draw_series(cells.iter().map(|&(i, j, _)| {
            Rectangle::new(
                [(j as f64, i as f64), ((j + 1) as f64, (i + 1) as f64)],
                WHITE.stroke_width(1),
            )
        }))?;

        let annot_style = ("sans-serif", 13)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(cells.iter().filter(|(_, _, v)| v.is_finite()).map(
            |&(i, j, v)| {
                Text::new(
                    format!("{:.1}", v),
                    (j as f64 + 0.5, i as f64 + 0.5),
                    annot_style.clone(),
                )
            },
        ))?;

        draw_color_bar(&bar_area)?;

        root.present()
            .with_context(|| format!("Failed to write heat map: {}", path.display()))?;
        Ok(())
    }
}

/// Map an integer tick to the column name it indexes; fractional ticks and
/// the closing boundary stay unlabeled.
fn column_label(columns: &[String], v: f64) -> String {
    let idx = v.round();
    if (v - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    columns.get(idx as usize).cloned().unwrap_or_default()
}

/// Diverging color scale centered at 0: blue for negative, red for positive,
/// gray for NaN cells.
fn diverging_color(v: f64) -> RGBColor {
    if v.is_nan() {
        return RGBColor(200, 200, 200);
    }
    let t = v.clamp(-1.0, 1.0);
    if t < 0.0 {
        blend((255, 255, 255), NEGATIVE_END, -t)
    } else {
        blend((255, 255, 255), POSITIVE_END, t)
    }
}

fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> RGBColor {
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    RGBColor(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

/// Vertical color bar shrunk to half the figure height, with -1/0/1 labels.
fn draw_color_bar(area: &DrawingArea<SVGBackend<'_>, Shift>) -> Result<()> {
    let (_, h) = area.dim_in_pixel();
    let bar_h = (h / 2) as i32;
    let top = (h as i32 - bar_h) / 2;
    let (x0, x1) = (10, 30);

    let step_h = bar_h as f64 / COLOR_BAR_STEPS as f64;
    for k in 0..COLOR_BAR_STEPS {
        let v = 1.0 - 2.0 * (k as f64 + 0.5) / COLOR_BAR_STEPS as f64;
        let y0 = top + (k as f64 * step_h).round() as i32;
        let y1 = top + ((k + 1) as f64 * step_h).round() as i32;
        area.draw(&Rectangle::new(
            [(x0, y0), (x1, y1)],
            diverging_color(v).filled(),
        ))?;
    }
    area.draw(&Rectangle::new(
        [(x0, top), (x1, top + bar_h)],
        BLACK.stroke_width(1),
    ))?;

    let label_style = ("sans-serif", 12).into_font().color(&BLACK);
    for (v, label) in [(1.0, "1.0"), (0.0, "0.0"), (-1.0, "-1.0")] {
        let y = top + ((1.0 - v) / 2.0 * bar_h as f64).round() as i32;
        area.draw(&Text::new(label, (x1 + 5, y - 6), label_style.clone()))?;
    }

    Ok(())
}

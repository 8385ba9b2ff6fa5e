//! Chart rendering with plotters (SVG backend)

pub mod catplot;
pub mod heatmap;

pub use catplot::*;
pub use heatmap::*;

//! Cardioviz: exploratory plots for a cardiovascular examination dataset
//!
//! Loads the examination table, derives a binary overweight indicator,
//! binarizes the ordinal lab values, and renders a categorical distribution
//! plot and a lower-triangle correlation heat map.

pub mod cli;
pub mod pipeline;
pub mod plot;
pub mod report;
pub mod utils;

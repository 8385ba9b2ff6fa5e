//! Pipeline module - preprocessing and the two plot pipelines

pub mod categorical;
pub mod correlation;
pub mod error;
pub mod loader;
pub mod outliers;
pub mod preprocess;

pub use categorical::*;
pub use correlation::*;
pub use error::*;
pub use loader::*;
pub use outliers::*;
pub use preprocess::*;

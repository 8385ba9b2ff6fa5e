//! Dataset-shape errors raised at pipeline boundaries

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("required column '{0}' not found in dataset")]
    MissingColumn(String),

    #[error("dataset contains no rows")]
    Empty,

    #[error("column '{0}' has no numeric values")]
    NotNumeric(String),
}

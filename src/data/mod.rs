// Data pipeline: normalization, position tagging, dataset catalog.

pub mod catalog;
pub mod contracts;
pub mod normalize;
pub mod position;
pub mod record;

use thiserror::Error;

/// Errors raised while resolving a logical dataset.
///
/// Per-cell parse failures are not represented here: a bad cell degrades the
/// one field to absent and the row survives. These variants cover the cases
/// where the dataset as a whole cannot be served.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {name}: {source}")]
    Csv { name: String, source: csv::Error },

    #[error("malformed dataset {name}: {reason}")]
    Malformed { name: String, reason: String },

    #[error("unknown dataset `{0}`")]
    Unknown(String),
}

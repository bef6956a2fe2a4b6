// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong in the pipeline.
///
/// The taxonomy is deliberately small: parameters are validated once up
/// front, and the only external resource touched is the output path.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("failed to write '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode sankey figure: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write flow log: {0}")]
    Csv(#[from] csv::Error),
}

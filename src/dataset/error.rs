use thiserror::Error;

use crate::io::octave_loader::MatrixLoadError;
use super::{DatasetName,ModelId};

#[derive(Debug,Error)]
pub enum DatasetError {
    #[error("unsupported dataset: {0}")]
    UnsupportedDataset(String),

    #[error("unsupported model for {dataset}: {model}")]
    UnsupportedModel { dataset: DatasetName, model: ModelId },

    #[error("failed to load bounding box from {path}: {source}")]
    BoundingBox { path: String, #[source] source: MatrixLoadError }
}

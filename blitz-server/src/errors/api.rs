use blitz_classifier::ModelError;

use super::HistoryError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("History error: {0}")]
    HistoryError(#[from] HistoryError),

    #[error("Model error: {0}")]
    ModelError(#[from] ModelError),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

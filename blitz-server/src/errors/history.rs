use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("History span must be between 1 and {max} hours, got {hours}")]
    InvalidHours { hours: u32, max: u32 },

    #[error("Invalid history query: {0}")]
    InvalidQuery(String),
}

impl HistoryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            HistoryError::InvalidHours { .. } | HistoryError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }
}

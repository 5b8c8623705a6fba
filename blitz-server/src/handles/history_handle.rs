use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use blitz_api::models::HistoryRecord;

use crate::configs::History;
use crate::errors::{ApiError, HistoryError};
use crate::services::{Clock, MockService};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub hours: Option<u32>,
}

#[derive(Clone)]
pub struct HistoryState {
    pub history: History,
    pub mock_service: Arc<MockService>,
    pub clock: Arc<dyn Clock>,
}

pub async fn get_history(
    State(state): State<HistoryState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<HistoryRecord>>, ApiError> {
    let Query(query) = query.map_err(|e| HistoryError::InvalidQuery(e.body_text()))?;

    let hours = query.hours.unwrap_or(state.history.hours);
    if hours == 0 || hours > state.history.max_hours {
        return Err(HistoryError::InvalidHours { hours, max: state.history.max_hours }.into());
    }

    let history = state
        .mock_service
        .history(&mut rand::rng(), state.clock.now(), hours);

    Ok(Json(history))
}

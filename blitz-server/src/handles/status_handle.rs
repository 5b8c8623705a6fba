use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use blitz_api::models::StatusResponse;

use crate::errors::ApiError;
use crate::services::{Clock, MockService, ModelService, TariffService};

#[derive(Clone)]
pub struct StatusState {
    pub model_service: Arc<ModelService>,
    pub tariff_service: Arc<TariffService>,
    pub mock_service: Arc<MockService>,
    pub clock: Arc<dyn Clock>,
}

pub async fn get_status(State(state): State<StatusState>) -> Result<Json<StatusResponse>, ApiError> {
    let powers = state.mock_service.sample_powers(&mut rand::rng());
    let readings = state.model_service.predict(powers)?;

    let hour = state.clock.now().hour();
    let cost = state.tariff_service.cost(&readings, hour);

    tracing::debug!(hour, cost, "classified loads: {:?}", readings);

    Ok(Json(StatusResponse::new(readings, cost)))
}

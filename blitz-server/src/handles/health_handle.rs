use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use blitz_api::models::HealthResponse;

use crate::services::ModelService;

#[derive(Clone)]
pub struct HealthState {
    pub model_service: Arc<ModelService>,
}

pub async fn get_health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        models: state.model_service.model_count(),
    })
}

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use blitz_api::routes::{HEALTH_PATH, HISTORY_PATH, STATUS_PATH};

use crate::configs::{History, Settings};
use crate::handles::*;
use crate::services::{Clock, MockService, ModelService, SystemClock, TariffService};

/// Everything the handlers share. Built once from settings, or by hand in tests.
#[derive(Clone)]
pub struct AppContext {
    pub model_service: Arc<ModelService>,
    pub tariff_service: Arc<TariffService>,
    pub mock_service: Arc<MockService>,
    pub clock: Arc<dyn Clock>,
    pub history: History,
}

impl AppContext {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let model_service = ModelService::load(&settings.models)?;
        let mock_service = MockService::new(&settings.mock)?;
        let clock = SystemClock::new(settings.tariff.utc_offset_hours)
            .context("Invalid tariff.utc_offset_hours")?;

        Ok(Self {
            model_service: Arc::new(model_service),
            tariff_service: Arc::new(TariffService::new(settings.tariff.clone())),
            mock_service: Arc::new(mock_service),
            clock: Arc::new(clock),
            history: settings.history.clone(),
        })
    }
}

pub fn create_app(settings: &Arc<Settings>) -> anyhow::Result<Router> {
    let context = AppContext::from_settings(settings)?;

    Ok(create_router(context))
}

pub fn create_router(context: AppContext) -> Router {
    let status = Router::new()
        .route(STATUS_PATH, get(get_status))
        .with_state(StatusState {
            model_service: context.model_service.clone(),
            tariff_service: context.tariff_service.clone(),
            mock_service: context.mock_service.clone(),
            clock: context.clock.clone(),
        });

    let history = Router::new()
        .route(HISTORY_PATH, get(get_history))
        .with_state(HistoryState {
            history: context.history.clone(),
            mock_service: context.mock_service.clone(),
            clock: context.clock.clone(),
        });

    let health = Router::new()
        .route(HEALTH_PATH, get(get_health))
        .with_state(HealthState {
            model_service: context.model_service.clone(),
        });

    Router::new()
        .merge(status)
        .merge(history)
        .merge(health)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

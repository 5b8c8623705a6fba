use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use time::OffsetDateTime;
use time::macros::datetime;
use tower::ServiceExt;

use blitz_classifier::Classifier;
use blitz_classifier::decision_tree::DecisionTree;
use blitz_classifier::node::Node;
use blitz_classifier::random_forest::{RandomForest, RandomForestType};
use blitz_server::app::{AppContext, create_router};
use blitz_server::configs::{History, Mock, Tariff};
use blitz_server::services::{FixedClock, MockService, ModelService, TariffService};

/// Noon falls inside the default peak window.
pub const NOON: OffsetDateTime = datetime!(2024-06-01 12:00 UTC);

pub struct MockApp {
    pub context: AppContext,
}

impl MockApp {
    pub fn new() -> Self {
        let context = AppContext {
            model_service: Arc::new(ModelService::new([
                constant_forest(1.0),
                constant_forest(0.0),
                constant_forest(1.0),
                constant_forest(0.0),
                constant_forest(1.0),
            ])),
            tariff_service: Arc::new(TariffService::new(Tariff::default())),
            mock_service: Arc::new(MockService::new(&Mock::default()).unwrap()),
            clock: Arc::new(FixedClock(NOON)),
            history: History::default(),
        };

        Self { context }
    }

    pub fn with_clock(mut self, now: OffsetDateTime) -> Self {
        self.context.clock = Arc::new(FixedClock(now));
        self
    }

    pub fn with_classifiers(mut self, classifiers: [Arc<dyn Classifier>; 5]) -> Self {
        self.context.model_service = Arc::new(ModelService::new(classifiers));
        self
    }

    pub fn router(&self) -> Router {
        create_router(self.context.clone())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        get_json(self.router(), uri).await
    }
}

pub async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}

/// A single leaf forest that always answers `label`.
pub fn constant_forest(label: f64) -> Arc<dyn Classifier> {
    Arc::new(
        RandomForest::new(
            RandomForestType::Classifier,
            vec![DecisionTree::new(Node::Leaf(label))],
        )
        .unwrap(),
    )
}

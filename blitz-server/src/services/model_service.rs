use std::sync::Arc;

use anyhow::{Context, bail};
use blitz_api::models::{LOAD_COUNT, LoadId, LoadReading, LoadReadings, LoadStatus};
use blitz_classifier::random_forest::RandomForest;
use blitz_classifier::{Classifier, ModelError};

use crate::configs::Models;

/// One independently trained binary classifier per load.
///
/// Every classifier sees the same feature row: the five channel powers in
/// channel order.
pub struct ModelService {
    classifiers: [Arc<dyn Classifier>; LOAD_COUNT],
}

impl ModelService {
    pub fn new(classifiers: [Arc<dyn Classifier>; LOAD_COUNT]) -> Self {
        Self { classifiers }
    }

    pub fn load(models: &Models) -> anyhow::Result<Self> {
        let mut classifiers = Vec::with_capacity(LOAD_COUNT);

        for id in LoadId::ALL {
            let path = models.path_for(id);
            let forest = RandomForest::load(&path)
                .with_context(|| format!("Failed to load model for {id} from {}", path.display()))?;

            if forest.feature_count() > LOAD_COUNT {
                bail!(
                    "Model {} reads {} features but only {LOAD_COUNT} are available",
                    path.display(),
                    forest.feature_count(),
                );
            }

            tracing::info!(
                "loaded {id} model: {} trees from {}",
                forest.forest.len(),
                path.display()
            );
            classifiers.push(Arc::new(forest) as Arc<dyn Classifier>);
        }

        let classifiers = classifiers
            .try_into()
            .map_err(|_| anyhow::anyhow!("Expected {LOAD_COUNT} models"))?;

        Ok(Self::new(classifiers))
    }

    pub fn model_count(&self) -> usize {
        self.classifiers.len()
    }

    /// Labels every channel from the shared feature row.
    pub fn predict(&self, powers: [f64; LOAD_COUNT]) -> Result<LoadReadings, ModelError> {
        let mut readings = [LoadReading { power: 0.0, status: LoadStatus::Off }; LOAD_COUNT];

        for id in LoadId::ALL {
            let prediction = self.classifiers[id.index()].classify(&powers)?;
            readings[id.index()] = LoadReading {
                power: powers[id.index()],
                status: LoadStatus::from_prediction(prediction),
            };
        }

        Ok(LoadReadings::new(readings))
    }
}

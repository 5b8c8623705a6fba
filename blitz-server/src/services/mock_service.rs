use anyhow::{anyhow, bail};
use rand::Rng;
use rand::distr::{Distribution, Uniform};
use rand_distr::Normal;
use time::{Duration, OffsetDateTime};

use blitz_api::models::{HistoryRecord, LOAD_COUNT, LoadReading, LoadReadings, LoadStatus};

use crate::configs::Mock;

/// Source of the synthetic readings. Nothing here is measured.
#[derive(Debug, Clone)]
pub struct MockService {
    power: Normal<f64>,
    cost: Uniform<f64>,
}

impl MockService {
    pub fn new(mock: &Mock) -> anyhow::Result<Self> {
        // Normal::new only rejects a non finite deviation.
        if mock.power_std_dev.is_nan() || mock.power_std_dev < 0.0 {
            bail!("Invalid power distribution: standard deviation must not be negative, got {}", mock.power_std_dev);
        }

        let power = Normal::new(mock.power_mean, mock.power_std_dev)
            .map_err(|e| anyhow!("Invalid power distribution: {e}"))?;
        let cost = Uniform::new(mock.cost_min, mock.cost_max)
            .map_err(|e| anyhow!("Invalid cost range: {e}"))?;

        Ok(Self { power, cost })
    }

    pub fn sample_powers<R: Rng + ?Sized>(&self, rng: &mut R) -> [f64; LOAD_COUNT] {
        std::array::from_fn(|_| self.power.sample(rng))
    }

    /// Hourly records from `now - hours` up to `now`, oldest first.
    pub fn history<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        now: OffsetDateTime,
        hours: u32,
    ) -> Vec<HistoryRecord> {
        (0..=hours)
            .rev()
            .map(|hours_ago| self.history_record(rng, now - Duration::hours(hours_ago.into())))
            .collect()
    }

    fn history_record<R: Rng + ?Sized>(&self, rng: &mut R, timestamp: OffsetDateTime) -> HistoryRecord {
        let cost = self.cost.sample(rng);
        let powers = self.sample_powers(rng);
        let readings = LoadReadings::from_fn(|id| LoadReading {
            power: powers[id.index()],
            status: if rng.random_bool(0.5) { LoadStatus::On } else { LoadStatus::Off },
        });

        HistoryRecord { timestamp, cost, readings }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn test_history_is_hourly_and_ends_now() {
        let service = MockService::new(&Mock::default()).unwrap();
        let now = datetime!(2024-06-01 12:30 UTC);

        let history = service.history(&mut StdRng::seed_from_u64(7), now, 24);

        assert_eq!(history.len(), 25);
        assert_eq!(history[0].timestamp, datetime!(2024-05-31 12:30 UTC));
        assert_eq!(history[24].timestamp, now);
        assert!(history.windows(2).all(|w| w[1].timestamp - w[0].timestamp == Duration::HOUR));
        assert!(history.iter().all(|record| (0.1..0.5).contains(&record.cost)));
    }

    #[test]
    fn test_powers_follow_configured_distribution() {
        let service = MockService::new(&Mock::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        let samples: Vec<f64> = (0..2000).flat_map(|_| service.sample_powers(&mut rng)).collect();
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;

        assert!((mean - 500.0).abs() < 10.0, "mean was {mean}");
    }

    #[test]
    fn test_invalid_distribution_is_rejected() {
        let mock = Mock { power_std_dev: -1.0, ..Mock::default() };
        assert!(MockService::new(&mock).is_err());

        let mock = Mock { power_std_dev: f64::NAN, ..Mock::default() };
        assert!(MockService::new(&mock).is_err());

        let mock = Mock { power_std_dev: 0.0, ..Mock::default() };
        assert!(MockService::new(&mock).is_ok());

        let mock = Mock { cost_min: 0.5, cost_max: 0.1, ..Mock::default() };
        assert!(MockService::new(&mock).is_err());
    }
}

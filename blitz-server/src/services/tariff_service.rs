use blitz_api::models::LoadReadings;

use crate::configs::Tariff;

/// Two rate tariff keyed on the wall clock hour.
#[derive(Debug, Clone)]
pub struct TariffService {
    tariff: Tariff,
}

impl TariffService {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    /// The peak window may wrap past midnight, e.g. 22..6.
    pub fn is_peak(&self, hour: u8) -> bool {
        let Tariff { peak_start, peak_end, .. } = self.tariff;

        if peak_start <= peak_end {
            (peak_start..peak_end).contains(&hour)
        } else {
            hour >= peak_start || hour < peak_end
        }
    }

    /// Rate in $/kWh for the given hour.
    pub fn rate_at(&self, hour: u8) -> f64 {
        if self.is_peak(hour) {
            self.tariff.peak_rate
        } else {
            self.tariff.off_peak_rate
        }
    }

    /// Cost of running the powered channels for one hour. Power is in W, so
    /// the product with a per kWh rate is scaled down by 1000.
    pub fn cost(&self, readings: &LoadReadings, hour: u8) -> f64 {
        readings.powered_load() * self.rate_at(hour) / 1000.0
    }
}

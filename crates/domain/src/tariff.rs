//! Tariff — the fixed currency-per-kWh cost model.

use serde::{Deserialize, Serialize};

/// Default electricity rate in currency units per kWh.
pub const DEFAULT_RATE_PER_KWH: f64 = 0.30;

/// Fixed-rate electricity tariff.
///
/// The rate is a configuration constant; it is never computed or fetched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    /// Currency units per kWh.
    pub rate_per_kwh: f64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            rate_per_kwh: DEFAULT_RATE_PER_KWH,
        }
    }
}

impl Tariff {
    /// Build a tariff with a custom rate.
    #[must_use]
    pub fn new(rate_per_kwh: f64) -> Self {
        Self { rate_per_kwh }
    }

    /// Running cost per hour for a given draw in watts.
    #[must_use]
    pub fn cost_per_hour(&self, watts: u32) -> f64 {
        f64::from(watts) / 1000.0 * self.rate_per_kwh
    }

    /// Projected yearly cost for a given draw and estimated usage hours.
    #[must_use]
    pub fn annual_cost(&self, watts: u32, hours_per_year: u32) -> f64 {
        f64::from(watts) / 1000.0 * f64::from(hours_per_year) * self.rate_per_kwh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_thirty_cents_per_kwh() {
        let tariff = Tariff::default();
        assert!((tariff.rate_per_kwh - 0.30).abs() < f64::EPSILON);
    }

    #[test]
    fn should_compute_hourly_cost_from_watts() {
        let tariff = Tariff::default();
        // 3000 W boiler at 0.30/kWh = 0.90 per hour
        assert!((tariff.cost_per_hour(3000) - 0.90).abs() < 1e-9);
    }

    #[test]
    fn should_cost_nothing_when_drawing_nothing() {
        let tariff = Tariff::default();
        assert!((tariff.cost_per_hour(0)).abs() < f64::EPSILON);
    }

    #[test]
    fn should_project_annual_cost() {
        let tariff = Tariff::default();
        // 150 W fridge running all year: 0.15 kW * 8760 h * 0.30
        let expected = 0.15 * 8760.0 * 0.30;
        assert!((tariff.annual_cost(150, 8760) - expected).abs() < 1e-9);
    }
}

//! Simple exponential smoothing (level only)

use crate::model::{Forecaster, Observations, Variant};
use log::debug;
use std::num::NonZeroUsize;

/// Level-only smoothing with a flat forecast
#[derive(Debug, Clone)]
pub struct SimpleSmoothing {
    alpha: f64,
    baseline: Option<f64>,
    observations: Observations,
}

impl SimpleSmoothing {
    /// Create a new simple smoothing model with the given level constant
    pub fn new(alpha: f64) -> Self {
        debug!("simple smoothing model created (alpha={})", alpha);
        Self {
            alpha,
            baseline: None,
            observations: Observations::new(),
        }
    }

    /// Current level, once at least one value has been seen
    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }

    fn update_parameters(&mut self, value: f64) {
        self.baseline = match self.baseline {
            None => Some(value),
            Some(previous) => Some(self.alpha * value + (1.0 - self.alpha) * previous),
        };
    }
}

impl Forecaster for SimpleSmoothing {
    fn variant(&self) -> Variant {
        Variant::Simple
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn observations(&self) -> &Observations {
        &self.observations
    }

    fn add_next_value(&mut self, value: f64) {
        let forecast = self.forecast_at(NonZeroUsize::MIN);
        self.observations.record(value, forecast);
        self.update_parameters(value);
        self.observations.advance();
    }

    fn forecast_at(&self, _h: NonZeroUsize) -> Option<f64> {
        if self.observations.num_seen() < Variant::Simple.warm_up() {
            return None;
        }
        self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_value_sets_baseline() {
        let mut model = SimpleSmoothing::new(0.3);
        model.add_next_value(10.0);

        assert_eq!(model.baseline(), Some(10.0));
        assert_eq!(model.forecast(1).unwrap(), None);
        assert_eq!(model.deviation(), None);
    }

    #[test]
    fn test_smoothing_recurrence() {
        let mut model = SimpleSmoothing::new(0.3);
        model.add_next_value(10.0);
        model.add_next_value(20.0); // 0.3*20 + 0.7*10 = 13

        assert_relative_eq!(model.baseline().unwrap(), 13.0, epsilon = 1e-12);
        assert_relative_eq!(model.forecast(1).unwrap().unwrap(), 13.0, epsilon = 1e-12);
    }

    #[test]
    fn test_forecast_is_flat() {
        let mut model = SimpleSmoothing::new(0.5);
        for value in [4.0, 8.0, 6.0] {
            model.add_next_value(value);
        }

        let one = model.forecast(1).unwrap();
        assert_eq!(model.forecast(7).unwrap(), one);
        assert_eq!(model.forecast(100).unwrap(), one);
    }

    #[test]
    fn test_deviation_against_previous_forecast() {
        let mut model = SimpleSmoothing::new(0.5);
        model.add_next_value(10.0);
        model.add_next_value(20.0); // baseline 15, but no forecast existed for 20
        assert_eq!(model.deviation(), None);

        model.add_next_value(11.0); // forecast for it was 15
        assert_relative_eq!(model.deviation().unwrap(), 4.0, epsilon = 1e-12);
        assert_eq!(model.last_forecast(), Some(15.0));
    }

    #[test]
    fn test_nan_propagates() {
        let mut model = SimpleSmoothing::new(0.5);
        model.add_next_value(1.0);
        model.add_next_value(f64::NAN);
        model.add_next_value(1.0);

        assert_eq!(model.num_seen(), 3);
        assert!(model.baseline().unwrap().is_nan());
        assert!(model.forecast(1).unwrap().unwrap().is_nan());
    }
}

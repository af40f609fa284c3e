//! Double exponential smoothing (Holt's linear method)

use crate::model::{Forecaster, Observations, Variant};
use log::{debug, trace};
use std::num::NonZeroUsize;

/// Level and trend smoothing with a linear forecast
#[derive(Debug, Clone)]
pub struct DoubleSmoothing {
    alpha: f64,
    beta: f64,
    baseline: Option<f64>,
    slope: Option<f64>,
    observations: Observations,
}

impl DoubleSmoothing {
    /// Create a new double smoothing model with level and trend constants
    pub fn new(alpha: f64, beta: f64) -> Self {
        debug!(
            "double smoothing model created (alpha={}, beta={})",
            alpha, beta
        );
        Self {
            alpha,
            beta,
            baseline: None,
            slope: None,
            observations: Observations::new(),
        }
    }

    /// Trend smoothing constant
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Current level, once at least one value has been seen
    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }

    /// Current trend, once at least two values have been seen
    pub fn slope(&self) -> Option<f64> {
        self.slope
    }

    fn update_parameters(&mut self, value: f64) {
        match (self.baseline, self.slope) {
            (None, _) => {
                self.baseline = Some(value);
            }
            (Some(previous), None) => {
                self.slope = Some(value - previous);
                self.baseline = Some(value);
                trace!("double smoothing: initial slope {}", value - previous);
            }
            (Some(old_baseline), Some(old_slope)) => {
                let baseline =
                    self.alpha * value + (1.0 - self.alpha) * (old_baseline + old_slope);
                let slope =
                    self.beta * (baseline - old_baseline) + (1.0 - self.beta) * old_slope;
                self.baseline = Some(baseline);
                self.slope = Some(slope);
            }
        }
    }
}

impl Forecaster for DoubleSmoothing {
    fn variant(&self) -> Variant {
        Variant::Double
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

    fn forecast_at(&self, h: NonZeroUsize) -> Option<f64> {
        if self.observations.num_seen() < Variant::Double.warm_up() {
            return None;
        }
        let baseline = self.baseline?;
        let slope = self.slope?;
        Some(baseline + h.get() as f64 * slope)
    }
}

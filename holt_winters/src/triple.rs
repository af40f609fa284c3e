//! Triple exponential smoothing (Holt-Winters, additive seasonality)
//!
//! # Recurrence
//!
//! Bootstrap, for period `L`:
//!
//! ```text
//! n = 0:      level = x, season[0] = x
//! n = 1:      trend = x - level, level = x, season[1] = x
//! 1 < n < L:  season[n] = x
//! ```
//!
//! Steady state (`n >= L`), with `s` the oldest seasonal entry:
//!
//! ```text
//! level  = α (x - s) + (1 - α)(level + trend)
//! trend  = β (level' - level) + (1 - β) trend
//! season = γ (x - level') + (1 - γ) s        appended as newest entry
//! ```
//!
//! Forecast: `level + h trend + season[(L - 1 + (h - 1) mod L) mod L]`

use crate::model::{Forecaster, Observations, Variant};
use crate::seasonal::SeasonalRing;
use crate::Result;
use log::{debug, trace};
use std::num::NonZeroUsize;

/// Level, trend and additive seasonal smoothing
#[derive(Debug, Clone)]
pub struct TripleSmoothing {
    alpha: f64,
    beta: f64,
    gamma: f64,
    baseline: Option<f64>,
    slope: Option<f64>,
    seasonal: SeasonalRing,
    observations: Observations,
}

impl TripleSmoothing {
    /// Create a new triple smoothing model.
    ///
    /// Fails with [`crate::SmoothingError::InvalidPeriod`] when `period` is zero.
    pub fn new(alpha: f64, beta: f64, gamma: f64, period: usize) -> Result<Self> {
        let seasonal = SeasonalRing::new(period)?;
        debug!(
            "triple smoothing model created (alpha={}, beta={}, gamma={}, period={})",
            alpha, beta, gamma, period
        );

        Ok(Self {
            alpha,
            beta,
            gamma,
            baseline: None,
            slope: None,
            seasonal,
            observations: Observations::new(),
        })
    }

    /// Trend smoothing constant
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Seasonal smoothing constant
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Season length
    pub fn period(&self) -> usize {
        self.seasonal.period()
    }

    /// Current level, once at least one value has been seen
    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }

    /// Current trend, once at least two values have been seen
    pub fn slope(&self) -> Option<f64> {
        self.slope
    }

    /// Snapshot of the seasonal buffer, oldest phase first
    pub fn seasonal_values(&self) -> Vec<f64> {
        self.seasonal.to_vec()
    }

    /// Read-only view of the seasonal buffer
    pub fn seasonal(&self) -> &SeasonalRing {
        &self.seasonal
    }

    fn update_parameters(&mut self, value: f64) {
        let seen = self.observations.num_seen();
        let period = self.seasonal.period();

        match (self.baseline, self.slope) {
            (None, _) => {
                self.baseline = Some(value);
                self.seasonal.set(0, value);
            }
            (Some(previous), None) => {
                self.slope = Some(value - previous);
                self.baseline = Some(value);
                // a single-phase season has no slot left for the second value
                if seen < period {
                    self.seasonal.set(seen, value);
                }
            }
            (Some(_), Some(_)) if seen < period => {
                self.seasonal.set(seen, value);
                if seen + 1 == period {
                    trace!(
                        "triple smoothing: seasonal bootstrap complete after {} values",
                        period
                    );
                }
            }
            (Some(old_baseline), Some(old_slope)) => {
                let old_seasonal = self.seasonal.get(0);
                let baseline = self.alpha * (value - old_seasonal)
                    + (1.0 - self.alpha) * (old_baseline + old_slope);
                let slope =
                    self.beta * (baseline - old_baseline) + (1.0 - self.beta) * old_slope;
                let seasonal =
                    self.gamma * (value - baseline) + (1.0 - self.gamma) * old_seasonal;

                self.seasonal.rotate(seasonal);
                self.baseline = Some(baseline);
                self.slope = Some(slope);
            }
        }
    }

    /// Logical seasonal index used for horizon `h`
    fn seasonal_index(&self, h: NonZeroUsize) -> usize {
        let period = self.seasonal.period();
        (period - 1 + (h.get() - 1) % period) % period
    }
}

impl Forecaster for TripleSmoothing {
    fn variant(&self) -> Variant {
        Variant::Triple
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
        if self.observations.num_seen() < Variant::Triple.warm_up() {
            return None;
        }
        let baseline = self.baseline?;
        let slope = self.slope?;
        Some(baseline + h.get() as f64 * slope + self.seasonal.get(self.seasonal_index(h)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SmoothingError;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn feed(model: &mut TripleSmoothing, values: &[f64]) {
        for &value in values {
            model.add_next_value(value);
        }
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(matches!(
            TripleSmoothing::new(0.5, 0.3, 0.1, 0),
            Err(SmoothingError::InvalidPeriod(0))
        ));
    }

    #[test]
    fn test_bootstrap_records_raw_values() {
        let mut model = TripleSmoothing::new(0.5, 0.3, 0.1, 4).unwrap();
        feed(&mut model, &[2.0, 5.0, 7.0]);

        assert_eq!(model.baseline(), Some(5.0));
        assert_eq!(model.slope(), Some(3.0));
        assert_eq!(model.seasonal_values(), vec![2.0, 5.0, 7.0, 0.0]);
    }

    #[test]
    fn test_forecast_available_before_full_season() {
        let mut model = TripleSmoothing::new(0.5, 0.3, 0.1, 6).unwrap();
        feed(&mut model, &[2.0, 5.0]);
        assert_eq!(model.forecast(1).unwrap(), None);

        model.add_next_value(7.0);
        // 5 + 1*3 + season[5], still the initial zero
        assert_eq!(model.forecast(1).unwrap(), Some(8.0));
        // h = 2 wraps to logical index 0
        assert_eq!(model.forecast(2).unwrap(), Some(5.0 + 6.0 + 2.0));
    }

    #[test]
    fn test_first_steady_state_update() {
        let mut model = TripleSmoothing::new(0.5, 0.3, 0.1, 3).unwrap();
        feed(&mut model, &[1.0, 2.0, 3.0, 4.0]);

        // old season[0] = 1, old level 2, old trend 1
        // level = 0.5*(4 - 1) + 0.5*(2 + 1) = 3
        // trend = 0.3*(3 - 2) + 0.7*1 = 1
        // season = 0.1*(4 - 3) + 0.9*1 = 1
        assert_relative_eq!(model.baseline().unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(model.slope().unwrap(), 1.0, epsilon = 1e-12);
        let seasonal = model.seasonal_values();
        assert_eq!(seasonal[..2].to_vec(), vec![2.0, 3.0]);
        assert_relative_eq!(seasonal[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_seasonal_index_selection() {
        let model = TripleSmoothing::new(0.5, 0.3, 0.1, 4).unwrap();
        let index = |h: usize| model.seasonal_index(NonZeroUsize::new(h).unwrap());

        assert_eq!(index(1), 3);
        assert_eq!(index(2), 0);
        assert_eq!(index(4), 2);
        assert_eq!(index(5), 3);
        assert_eq!(index(9), 3);
    }

    #[test]
    fn test_buffer_length_constant() {
        let mut model = TripleSmoothing::new(0.5, 0.3, 0.1, 5).unwrap();
        for i in 0..23 {
            model.add_next_value(i as f64);
            assert_eq!(model.seasonal_values().len(), 5);
        }
        assert_eq!(model.num_seen(), 23);
    }

    #[test]
    fn test_single_phase_season() {
        let mut model = TripleSmoothing::new(0.5, 0.5, 0.5, 1).unwrap();
        feed(&mut model, &[4.0, 6.0]);
        assert_eq!(model.seasonal_values(), vec![4.0]);
        assert_eq!(model.slope(), Some(2.0));

        model.add_next_value(8.0);
        // level = 0.5*(8 - 4) + 0.5*(6 + 2) = 6
        assert_eq!(model.baseline(), Some(6.0));
        assert_eq!(model.seasonal_values().len(), 1);
    }

    #[test]
    fn test_forecast_is_read_only() {
        let mut model = TripleSmoothing::new(0.5, 0.3, 0.1, 4).unwrap();
        feed(&mut model, &[3.0, 4.0, 5.0, 4.0, 3.0, 4.0]);

        let before = model.seasonal_values();
        let first = model.forecast(3).unwrap();
        assert_eq!(model.forecast(3).unwrap(), first);
        assert_eq!(model.seasonal_values(), before);
        assert_eq!(model.num_seen(), 6);
    }
}

//! Shared model interface
//!
//! Every smoothing variant keeps the same observation bookkeeping and exposes
//! the same read/update surface through [`Forecaster`]. Only the update
//! recurrence and the forecast formula differ per variant.

use crate::{Result, SmoothingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;

/// Which smoothing components a model carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// Level only
    Simple = 1,
    /// Level and trend
    Double = 2,
    /// Level, trend and seasonality
    Triple = 3,
}

impl Variant {
    /// Number of observations needed before `forecast` returns a value
    pub fn warm_up(&self) -> usize {
        match self {
            Variant::Simple => 2,
            Variant::Double | Variant::Triple => 3,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Simple => "simple",
            Variant::Double => "double",
            Variant::Triple => "triple",
        };
        f.write_str(name)
    }
}

/// Observation bookkeeping common to all variants
///
/// `last_forecast` is the one-step forecast that was available right before
/// `last_value` was incorporated, so the two can be compared after the update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observations {
    num_seen: usize,
    last_value: Option<f64>,
    last_forecast: Option<f64>,
}

impl Observations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values incorporated so far
    pub fn num_seen(&self) -> usize {
        self.num_seen
    }

    /// Most recently added raw value
    pub fn last_value(&self) -> Option<f64> {
        self.last_value
    }

    /// Forecast that was made for the most recent value before it was seen
    pub fn last_forecast(&self) -> Option<f64> {
        self.last_forecast
    }

    /// Absolute error of the forecast made for the most recent value
    pub fn deviation(&self) -> Option<f64> {
        match (self.last_value, self.last_forecast) {
            (Some(value), Some(forecast)) => Some((value - forecast).abs()),
            _ => None,
        }
    }

    /// Stores a new value together with the forecast made for it.
    /// Must run before the variant's recurrence mutates its state.
    pub(crate) fn record(&mut self, value: f64, forecast: Option<f64>) {
        self.last_forecast = forecast;
        self.last_value = Some(value);
    }

    /// Marks the current value as incorporated
    pub(crate) fn advance(&mut self) {
        self.num_seen += 1;
    }
}

/// Common interface of the smoothing variants
pub trait Forecaster {
    /// Variant tag of this model
    fn variant(&self) -> Variant;

    /// Level smoothing constant
    fn alpha(&self) -> f64;

    /// Observation bookkeeping of this model
    fn observations(&self) -> &Observations;

    /// Incorporates the next value of the series.
    ///
    /// Never fails. Non-finite values propagate into the model state.
    fn add_next_value(&mut self, value: f64);

    /// Forecast `h` steps past the most recent value, or `None` during warm-up
    fn forecast_at(&self, h: NonZeroUsize) -> Option<f64>;

    /// Forecast `h` steps past the most recent value.
    ///
    /// Returns `Ok(None)` while the model is still warming up and
    /// [`SmoothingError::InvalidHorizon`] when `h` is zero.
    fn forecast(&self, h: usize) -> Result<Option<f64>> {
        let horizon = NonZeroUsize::new(h).ok_or(SmoothingError::InvalidHorizon(h))?;
        Ok(self.forecast_at(horizon))
    }

    /// `|last value - forecast made for it|`, if both exist
    fn deviation(&self) -> Option<f64> {
        self.observations().deviation()
    }

    fn num_seen(&self) -> usize {
        self.observations().num_seen()
    }

    fn last_value(&self) -> Option<f64> {
        self.observations().last_value()
    }

    fn last_forecast(&self) -> Option<f64> {
        self.observations().last_forecast()
    }

    /// Whether enough values have been seen for `forecast` to return a value
    fn is_warmed_up(&self) -> bool {
        self.num_seen() >= self.variant().warm_up()
    }
}

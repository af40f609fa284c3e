//! Variant selection
//!
//! [`SmoothingParams`] describes which smoothing constants a caller supplies;
//! [`HoltWinters::create`] turns that description into the matching model.
//!
//! Selection order:
//! 1. beta, gamma and period all present: [`TripleSmoothing`]
//! 2. beta present: [`DoubleSmoothing`]
//! 3. otherwise: [`SimpleSmoothing`]

use crate::double::DoubleSmoothing;
use crate::model::{Forecaster, Observations, Variant};
use crate::simple::SimpleSmoothing;
use crate::triple::TripleSmoothing;
use crate::Result;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Smoothing constants for a model, with optional trend and seasonal parts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothingParams {
    /// Level smoothing constant
    pub alpha: f64,
    /// Trend smoothing constant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    /// Seasonal smoothing constant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    /// Season length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<usize>,
}

impl SmoothingParams {
    /// Level-only parameters
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha,
            beta: None,
            gamma: None,
            period: None,
        }
    }

    /// Adds a trend smoothing constant
    pub fn with_trend(mut self, beta: f64) -> Self {
        self.beta = Some(beta);
        self
    }

    /// Adds a seasonal smoothing constant and season length
    pub fn with_seasonality(mut self, gamma: f64, period: usize) -> Self {
        self.gamma = Some(gamma);
        self.period = Some(period);
        self
    }

    /// Parses parameters from a JSON document such as
    /// `{"alpha": 0.5, "beta": 0.3, "gamma": 0.1, "period": 4}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Variant these parameters select
    pub fn variant(&self) -> Variant {
        match (self.beta, self.gamma, self.period) {
            (Some(_), Some(_), Some(_)) => Variant::Triple,
            (Some(_), _, _) => Variant::Double,
            (None, _, _) => Variant::Simple,
        }
    }
}

/// Any of the three smoothing variants behind one type
#[derive(Debug, Clone)]
pub enum HoltWinters {
    Simple(SimpleSmoothing),
    Double(DoubleSmoothing),
    Triple(TripleSmoothing),
}

impl HoltWinters {
    /// Build the model selected by `params`.
    ///
    /// Fails only when a triple model is selected with a zero period.
    pub fn create(params: &SmoothingParams) -> Result<Self> {
        let variant = params.variant();
        if variant != Variant::Triple && (params.gamma.is_some() || params.period.is_some()) {
            warn!(
                "seasonal parameters ignored, {} smoothing needs beta, gamma and period together",
                variant
            );
        }
        debug!("selected {} smoothing", variant);

        let model = match (params.beta, params.gamma, params.period) {
            (Some(beta), Some(gamma), Some(period)) => {
                HoltWinters::Triple(TripleSmoothing::new(params.alpha, beta, gamma, period)?)
            }
            (Some(beta), _, _) => HoltWinters::Double(DoubleSmoothing::new(params.alpha, beta)),
            (None, _, _) => HoltWinters::Simple(SimpleSmoothing::new(params.alpha)),
        };
        Ok(model)
    }

    /// Trend smoothing constant, absent for the simple variant
    pub fn beta(&self) -> Option<f64> {
        match self {
            HoltWinters::Simple(_) => None,
            HoltWinters::Double(model) => Some(model.beta()),
            HoltWinters::Triple(model) => Some(model.beta()),
        }
    }

    /// Seasonal smoothing constant, present only for the triple variant
    pub fn gamma(&self) -> Option<f64> {
        match self {
            HoltWinters::Triple(model) => Some(model.gamma()),
            _ => None,
        }
    }

    /// Season length, present only for the triple variant
    pub fn period(&self) -> Option<usize> {
        match self {
            HoltWinters::Triple(model) => Some(model.period()),
            _ => None,
        }
    }

    pub fn baseline(&self) -> Option<f64> {
        match self {
            HoltWinters::Simple(model) => model.baseline(),
            HoltWinters::Double(model) => model.baseline(),
            HoltWinters::Triple(model) => model.baseline(),
        }
    }

    pub fn slope(&self) -> Option<f64> {
        match self {
            HoltWinters::Simple(_) => None,
            HoltWinters::Double(model) => model.slope(),
            HoltWinters::Triple(model) => model.slope(),
        }
    }

    /// Snapshot of the seasonal buffer, present only for the triple variant
    pub fn seasonal_values(&self) -> Option<Vec<f64>> {
        match self {
            HoltWinters::Triple(model) => Some(model.seasonal_values()),
            _ => None,
        }
    }

    fn as_forecaster(&self) -> &dyn Forecaster {
        match self {
            HoltWinters::Simple(model) => model,
            HoltWinters::Double(model) => model,
            HoltWinters::Triple(model) => model,
        }
    }
}

impl Forecaster for HoltWinters {
    fn variant(&self) -> Variant {
        self.as_forecaster().variant()
    }

    fn alpha(&self) -> f64 {
        self.as_forecaster().alpha()
    }

    fn observations(&self) -> &Observations {
        self.as_forecaster().observations()
    }

    fn add_next_value(&mut self, value: f64) {
        match self {
            HoltWinters::Simple(model) => model.add_next_value(value),
            HoltWinters::Double(model) => model.add_next_value(value),
            HoltWinters::Triple(model) => model.add_next_value(value),
        }
    }

    fn forecast_at(&self, h: NonZeroUsize) -> Option<f64> {
        self.as_forecaster().forecast_at(h)
    }
}

impl From<SimpleSmoothing> for HoltWinters {
    fn from(model: SimpleSmoothing) -> Self {
        HoltWinters::Simple(model)
    }
}

impl From<DoubleSmoothing> for HoltWinters {
    fn from(model: DoubleSmoothing) -> Self {
        HoltWinters::Double(model)
    }
}

impl From<TripleSmoothing> for HoltWinters {
    fn from(model: TripleSmoothing) -> Self {
        HoltWinters::Triple(model)
    }
}

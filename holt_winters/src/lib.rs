//! # Holt Winters
//!
//! Online (one-pass) Holt-Winters exponential smoothing over a scalar time
//! series. Values are fed one at a time and forecasts can be read back at
//! any point.
//!
//! Three model variants share one interface ([`Forecaster`]):
//! - [`SimpleSmoothing`]: level only
//! - [`DoubleSmoothing`]: level and trend (Holt's linear method)
//! - [`TripleSmoothing`]: level, trend and additive seasonality
//!
//! [`HoltWinters`] wraps the three and picks one from a [`SmoothingParams`]
//! description.
//!
//! ```
//! use holt_winters::{Forecaster, HoltWinters, SmoothingParams};
//!
//! let params = SmoothingParams::new(0.5).with_trend(0.3);
//! let mut model = HoltWinters::create(&params).unwrap();
//! for value in [10.0, 12.0, 14.0] {
//!     model.add_next_value(value);
//! }
//! assert!(model.forecast(1).unwrap().is_some());
//! ```

use thiserror::Error;

pub mod double;
pub mod factory;
pub mod model;
pub mod seasonal;
pub mod simple;
pub mod triple;

pub use double::DoubleSmoothing;
pub use factory::{HoltWinters, SmoothingParams};
pub use model::{Forecaster, Variant};
pub use seasonal::SeasonalRing;
pub use simple::SimpleSmoothing;
pub use triple::TripleSmoothing;

/// Errors raised for precondition violations at the API boundary
#[derive(Error, Debug)]
pub enum SmoothingError {
    #[error("Invalid seasonal period: {0} (must be at least 1)")]
    InvalidPeriod(usize),

    #[error("Invalid forecast horizon: {0} (must be at least 1)")]
    InvalidHorizon(usize),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for smoothing operations
pub type Result<T> = std::result::Result<T, SmoothingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SmoothingError::InvalidPeriod(0);
        assert!(err.to_string().contains("period: 0"));

        let err = SmoothingError::InvalidHorizon(0);
        assert!(err.to_string().contains("horizon: 0"));
    }

    #[test]
    fn test_config_error_conversion() {
        let json_err = serde_json::from_str::<SmoothingParams>("not json").unwrap_err();
        let err = SmoothingError::from(json_err);
        assert!(matches!(err, SmoothingError::Config(_)));
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}

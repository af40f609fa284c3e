//! # Holt Winters Workspace
//!
//! Facade over the workspace crates. Re-exports the online smoothing models
//! from [`holt_winters`].
//!
//! ## Example
//!
//! ```
//! use holt_winters_workspace::{Forecaster, HoltWinters, SmoothingParams};
//!
//! let params = SmoothingParams::new(0.5).with_trend(0.3).with_seasonality(0.1, 4);
//! let mut model = HoltWinters::create(&params).unwrap();
//! for value in [3.0, 3.0, 3.0, 3.0, 5.0] {
//!     model.add_next_value(value);
//! }
//! assert_eq!(model.num_seen(), 5);
//! assert_eq!(model.seasonal_values().map(|s| s.len()), Some(4));
//! ```

pub use holt_winters::*;

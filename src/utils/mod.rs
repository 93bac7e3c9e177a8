//! Shared numeric utilities
//!
//! - Quantiles: linear-interpolated quantile, mean and median over score columns
//! - Rounding: fixed-decimal rounding used by report columns

pub mod quantiles;
pub mod rounding;

pub use quantiles::{mean, median, quantile_linear};
pub use rounding::{round1, round2};

//! Statistical helpers for simulated series: sample autocorrelation,
//! descriptive moments, and small comparison utilities.

mod error;
mod sacf;
mod utils;

pub use error::StatsError;
pub use sacf::{DEFAULT_MAX_LAG, LagPolicy, SacfConfig, SacfTable, sacf, sacf_series};
pub use utils::{accuracy, filter_columns};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance with N denominator (matching NumPy's `var()`).
/// Returns 0.0 if empty.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

//! Sample autocorrelation function over one or more parallel series.

use std::fmt;

use ndarray::{Array2, ArrayView2, Axis};
use tracing::{info, warn};

use crate::error::StatsError;
use crate::{mean, population_variance};

/// Default number of lags.
pub const DEFAULT_MAX_LAG: usize = 10;

/// What to do when the lag length is not smaller than the series length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LagPolicy {
    /// Warn and keep all `max_lag` rows; lags `>= n` are exactly zero.
    #[default]
    Warn,
    /// Warn and truncate the table to lags `1..=n-1`.
    Clamp,
    /// Fail with [`StatsError::LagExceedsLength`] when `max_lag > n`.
    Reject,
}

/// Configuration for [`sacf`].
///
/// # Example
///
/// ```
/// use tsim_stats::{LagPolicy, SacfConfig};
///
/// let config = SacfConfig::new()
///     .with_max_lag(20)
///     .with_lag_policy(LagPolicy::Reject);
/// assert_eq!(config.max_lag(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SacfConfig {
    max_lag: usize,
    lag_policy: LagPolicy,
    report: bool,
}

impl SacfConfig {
    /// Creates a configuration with `max_lag = 10`, `LagPolicy::Warn` and reporting off.
    pub fn new() -> Self {
        Self {
            max_lag: DEFAULT_MAX_LAG,
            lag_policy: LagPolicy::Warn,
            report: false,
        }
    }

    /// Sets the number of lags.
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = max_lag;
        self
    }

    /// Sets the policy for lag lengths exceeding the series length.
    pub fn with_lag_policy(mut self, policy: LagPolicy) -> Self {
        self.lag_policy = policy;
        self
    }

    /// Emits the finished table through `tracing::info!` when enabled.
    pub fn with_report(mut self, report: bool) -> Self {
        self.report = report;
        self
    }

    /// Returns the number of lags.
    pub fn max_lag(&self) -> usize {
        self.max_lag
    }

    /// Returns the lag policy.
    pub fn lag_policy(&self) -> LagPolicy {
        self.lag_policy
    }

    /// Returns whether the table is reported.
    pub fn report(&self) -> bool {
        self.report
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.max_lag == 0 {
            return Err(StatsError::InvalidLag {
                max_lag: self.max_lag,
            });
        }
        Ok(())
    }
}

impl Default for SacfConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the sample autocorrelation of every column of `x`.
///
/// `x` has shape `(n, m)`: `n` observations of `m` parallel series. Row
/// `i - 1` of the result holds lag `i`; lag 0 is not included. For each
/// column, with population mean and variance over all `n` observations:
///
/// ```text
/// sacf[i-1, j] = (1/n) * sum_{t=0}^{n-i-1} (x[t,j] - mean_j)(x[t+i,j] - mean_j) / var_j
/// ```
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`StatsError::InvalidLag`] | `max_lag == 0` |
/// | [`StatsError::EmptyData`] | `n == 0` or `m == 0` |
/// | [`StatsError::NonFiniteData`] | any element is NaN or infinite |
/// | [`StatsError::ZeroVariance`] | a column is constant |
/// | [`StatsError::LagExceedsLength`] | `max_lag > n` under [`LagPolicy::Reject`] |
pub fn sacf(x: ArrayView2<'_, f64>, config: &SacfConfig) -> Result<Array2<f64>, StatsError> {
    config.validate()?;
    let (n, m) = x.dim();
    if n == 0 || m == 0 {
        return Err(StatsError::EmptyData);
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(StatsError::NonFiniteData);
    }

    let rows = resolve_lags(config, n)?;
    let nf = n as f64;
    let mut out = Array2::zeros((rows, m));

    for (j, col) in x.axis_iter(Axis(1)).enumerate() {
        let values = col.to_vec();
        let first = values[0];
        if values.iter().all(|&v| v == first) {
            return Err(StatsError::ZeroVariance { column: j });
        }
        let col_mean = mean(&values);
        let var = population_variance(&values);
        if var <= 0.0 {
            return Err(StatsError::ZeroVariance { column: j });
        }

        // Lags >= n have no terms and stay zero.
        for lag in 1..=rows.min(n - 1) {
            let cov = (0..n - lag)
                .map(|t| (values[t] - col_mean) * (values[t + lag] - col_mean))
                .sum::<f64>()
                / nf;
            out[[lag - 1, j]] = cov / var;
        }
    }

    if config.report {
        info!("sample autocorrelation\n{}", SacfTable::new(out.view()));
    }
    Ok(out)
}

/// Single-series convenience wrapper around [`sacf`].
///
/// Returns one value per lag.
pub fn sacf_series(x: &[f64], config: &SacfConfig) -> Result<Vec<f64>, StatsError> {
    let view = ArrayView2::from_shape((x.len(), 1), x).map_err(|_| StatsError::EmptyData)?;
    Ok(sacf(view, config)?.column(0).to_vec())
}

/// Applies the lag policy and returns the number of table rows.
fn resolve_lags(config: &SacfConfig, n: usize) -> Result<usize, StatsError> {
    let max_lag = config.max_lag;
    match config.lag_policy {
        LagPolicy::Warn => {
            if max_lag > n {
                warn!(
                    n,
                    max_lag,
                    default_lag = max_lag == DEFAULT_MAX_LAG,
                    "series length is less than lag length; lags >= n are zero"
                );
            }
            Ok(max_lag)
        }
        LagPolicy::Clamp => {
            if max_lag >= n {
                // k == n only drops the empty last lag; that is not a mismatch.
                if max_lag > n {
                    warn!(n, max_lag, clamped = n - 1, "lag length clamped to series length - 1");
                }
                Ok(n - 1)
            } else {
                Ok(max_lag)
            }
        }
        LagPolicy::Reject => {
            if max_lag > n {
                Err(StatsError::LagExceedsLength { max_lag, n })
            } else {
                Ok(max_lag)
            }
        }
    }
}

/// Human-readable rendering of a SACF table (lags down, series across).
#[derive(Debug, Clone, Copy)]
pub struct SacfTable<'a> {
    table: ArrayView2<'a, f64>,
}

impl<'a> SacfTable<'a> {
    /// Wraps a `(lags, series)` table.
    pub fn new(table: ArrayView2<'a, f64>) -> Self {
        Self { table }
    }
}

impl fmt::Display for SacfTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5}", "lag")?;
        for j in 0..self.table.ncols() {
            write!(f, " {:>10}", format!("s{j}"))?;
        }
        for (i, row) in self.table.axis_iter(Axis(0)).enumerate() {
            writeln!(f)?;
            write!(f, "{:>5}", i + 1)?;
            for v in row.iter() {
                write!(f, " {v:>10.4}")?;
            }
        }
        Ok(())
    }
}

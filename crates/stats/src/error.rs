//! Error types for the tsim-stats crate.

/// Error type for all fallible operations in the tsim-stats crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsError {
    /// Returned when the input has no observations or no columns.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the input contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when a column is constant, so autocorrelation is undefined.
    #[error("column {column} is constant (zero variance)")]
    ZeroVariance {
        /// Zero-based column index.
        column: usize,
    },

    /// Returned when the requested number of lags is zero.
    #[error("invalid lag length: {max_lag} (must be >= 1)")]
    InvalidLag {
        /// The rejected lag length.
        max_lag: usize,
    },

    /// Returned under [`crate::LagPolicy::Reject`] when the lag length exceeds the series length.
    #[error("lag length {max_lag} exceeds series length {n}")]
    LagExceedsLength {
        /// Requested lag length.
        max_lag: usize,
        /// Number of observations.
        n: usize,
    },

    /// Returned when two inputs that must align have different lengths.
    #[error("shape mismatch: left has {left} elements, right has {right}")]
    ShapeMismatch {
        /// Length of the first input.
        left: usize,
        /// Length of the second input.
        right: usize,
    },
}

//! Error types for the tsim-hmm crate.

/// Error type for all fallible operations in the tsim-hmm crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HmmError {
    /// Returned when a model with zero hidden states is requested.
    #[error("model must have at least one hidden state")]
    NoStates,

    /// Returned when a parameter vector does not match the number of states.
    #[error("{what} has {got} entries, expected {expected}")]
    ShapeMismatch {
        /// Which parameter is mis-shaped.
        what: &'static str,
        /// Expected length (number of states).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when a probability vector or matrix row is not a distribution.
    #[error("invalid probability: {reason}")]
    InvalidProbability {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an emission standard deviation is not finite and positive.
    #[error("emission std dev for state {state} must be finite and > 0, got {value}")]
    InvalidStdDev {
        /// Zero-based state index.
        state: usize,
        /// The invalid value.
        value: f64,
    },

    /// Returned when an emission mean is NaN or infinite.
    #[error("emission mean for state {state} is not finite")]
    NonFiniteMean {
        /// Zero-based state index.
        state: usize,
    },
}

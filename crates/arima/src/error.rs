//! Error types for the tsim-arima crate.

/// Error type for all fallible operations in the tsim-arima crate.
///
/// Parameter validation failures are reported before any randomness is
/// consumed, so a failed call never advances the caller's RNG.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ArimaError {
    /// Returned when a simulation of zero observations is requested.
    #[error("requested series length must be at least 1")]
    ZeroLength,

    /// Returned when the innovation standard deviation is not finite and positive.
    #[error("innovation sigma must be finite and > 0, got {sigma}")]
    InvalidSigma {
        /// The rejected standard deviation.
        sigma: f64,
    },

    /// Returned when a scalar parameter (`mu`, `trend`, `tau`) is NaN or infinite.
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when an AR or MA coefficient is NaN or infinite.
    #[error("{which} coefficient at index {index} is not finite")]
    NonFiniteCoefficient {
        /// `"phi"` or `"theta"`.
        which: &'static str,
        /// Zero-based coefficient index.
        index: usize,
    },

    /// Returned when the innovation distribution cannot be constructed.
    #[error("invalid innovation distribution: {reason}")]
    InvalidInnovation {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a recorded innovation source holds too few values.
    #[error("innovation source exhausted: requested {requested}, available {available}")]
    InsufficientInnovations {
        /// Number of draws requested.
        requested: usize,
        /// Number of draws remaining.
        available: usize,
    },

    /// Returned when a blended model is built without an external generator.
    #[error("blended model requires an external sequence generator")]
    MissingGenerator,

    /// Returned when the external generator returns a sequence of the wrong length.
    #[error("external generator returned {got} values, expected {expected}")]
    GeneratorLengthMismatch {
        /// Requested length.
        expected: usize,
        /// Length actually returned.
        got: usize,
    },

    /// Returned when a pre-allocated buffer has the wrong shape.
    #[error("buffer length mismatch: expected {expected}, got {got}")]
    BufferLengthMismatch {
        /// Expected buffer length.
        expected: usize,
        /// Actual buffer length.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_zero_length() {
        let err = ArimaError::ZeroLength;
        assert_eq!(err.to_string(), "requested series length must be at least 1");
    }

    #[test]
    fn error_invalid_sigma() {
        let err = ArimaError::InvalidSigma { sigma: -1.0 };
        assert_eq!(
            err.to_string(),
            "innovation sigma must be finite and > 0, got -1"
        );
    }

    #[test]
    fn error_non_finite_parameter() {
        let err = ArimaError::NonFiniteParameter {
            name: "mu",
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "parameter `mu` must be finite, got NaN");
    }

    #[test]
    fn error_non_finite_coefficient() {
        let err = ArimaError::NonFiniteCoefficient {
            which: "theta",
            index: 2,
        };
        assert_eq!(err.to_string(), "theta coefficient at index 2 is not finite");
    }

    #[test]
    fn error_insufficient_innovations() {
        let err = ArimaError::InsufficientInnovations {
            requested: 40,
            available: 12,
        };
        assert_eq!(
            err.to_string(),
            "innovation source exhausted: requested 40, available 12"
        );
    }

    #[test]
    fn error_missing_generator() {
        let err = ArimaError::MissingGenerator;
        assert_eq!(
            err.to_string(),
            "blended model requires an external sequence generator"
        );
    }

    #[test]
    fn error_generator_length_mismatch() {
        let err = ArimaError::GeneratorLengthMismatch {
            expected: 20,
            got: 19,
        };
        assert_eq!(
            err.to_string(),
            "external generator returned 19 values, expected 20"
        );
    }

    #[test]
    fn error_buffer_length_mismatch() {
        let err = ArimaError::BufferLengthMismatch {
            expected: 365,
            got: 0,
        };
        assert_eq!(err.to_string(), "buffer length mismatch: expected 365, got 0");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ArimaError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ArimaError>();
    }
}

//! Sources of i.i.d. innovation shocks.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::ArimaError;

/// Produces the innovation sequence that drives a simulation.
///
/// Implementations must return exactly `n` values or fail. The simulator
/// calls [`InnovationSource::draw`] once per sample path.
pub trait InnovationSource {
    /// Draws `n` innovations with the given mean and standard deviation.
    fn draw(&mut self, mu: f64, sigma: f64, n: usize) -> Result<Vec<f64>, ArimaError>;
}

/// Gaussian white noise backed by a caller-supplied RNG.
///
/// Pass `&mut rng` to keep using the RNG afterwards, or move an owned RNG in.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsim_arima::{GaussianInnovations, InnovationSource};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let draws = GaussianInnovations::new(&mut rng).draw(0.0, 1.0, 5).unwrap();
/// assert_eq!(draws.len(), 5);
/// ```
#[derive(Debug)]
pub struct GaussianInnovations<R> {
    rng: R,
}

impl<R: Rng> GaussianInnovations<R> {
    /// Wraps an RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> InnovationSource for GaussianInnovations<R> {
    fn draw(&mut self, mu: f64, sigma: f64, n: usize) -> Result<Vec<f64>, ArimaError> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(ArimaError::InvalidSigma { sigma });
        }
        if !mu.is_finite() {
            return Err(ArimaError::InvalidInnovation {
                reason: format!("mean must be finite, got {mu}"),
            });
        }
        let normal = Normal::new(mu, sigma).map_err(|e| ArimaError::InvalidInnovation {
            reason: e.to_string(),
        })?;
        Ok((0..n).map(|_| normal.sample(&mut self.rng)).collect())
    }
}

/// Replays a fixed, pre-drawn innovation sequence.
///
/// Each call to [`InnovationSource::draw`] consumes values from the front
/// of the recording; `mu` and `sigma` are ignored. Useful for feeding the
/// identical shocks to two simulations.
#[derive(Clone, Debug)]
pub struct RecordedInnovations {
    values: Vec<f64>,
    cursor: usize,
}

impl RecordedInnovations {
    /// Creates a replay source over `values`.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Creates a source that yields `value` for `len` draws.
    pub fn constant(value: f64, len: usize) -> Self {
        Self::new(vec![value; len])
    }

    /// Number of values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.cursor
    }
}

impl InnovationSource for RecordedInnovations {
    fn draw(&mut self, _mu: f64, _sigma: f64, n: usize) -> Result<Vec<f64>, ArimaError> {
        if n > self.remaining() {
            return Err(ArimaError::InsufficientInnovations {
                requested: n,
                available: self.remaining(),
            });
        }
        let start = self.cursor;
        self.cursor += n;
        Ok(self.values[start..self.cursor].to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tsim_stats::{mean, population_variance};

    #[test]
    fn gaussian_length() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws = GaussianInnovations::new(&mut rng).draw(0.0, 1.0, 100).unwrap();
        assert_eq!(draws.len(), 100);
        assert!(draws.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn gaussian_deterministic_with_seed() {
        let a = GaussianInnovations::new(StdRng::seed_from_u64(5))
            .draw(1.0, 2.0, 20)
            .unwrap();
        let b = GaussianInnovations::new(StdRng::seed_from_u64(5))
            .draw(1.0, 2.0, 20)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn gaussian_moments() {
        let mut src = GaussianInnovations::new(StdRng::seed_from_u64(123));
        let draws = src.draw(3.0, 0.5, 20_000).unwrap();
        assert_abs_diff_eq!(mean(&draws), 3.0, epsilon = 0.02);
        assert_abs_diff_eq!(population_variance(&draws), 0.25, epsilon = 0.02);
    }

    #[test]
    fn gaussian_rejects_bad_sigma() {
        let mut src = GaussianInnovations::new(StdRng::seed_from_u64(1));
        assert!(matches!(
            src.draw(0.0, 0.0, 3),
            Err(ArimaError::InvalidSigma { .. })
        ));
        assert!(matches!(
            src.draw(0.0, f64::NAN, 3),
            Err(ArimaError::InvalidSigma { .. })
        ));
    }

    #[test]
    fn gaussian_rejects_non_finite_mean() {
        let mut src = GaussianInnovations::new(StdRng::seed_from_u64(1));
        assert!(matches!(
            src.draw(f64::INFINITY, 1.0, 3),
            Err(ArimaError::InvalidInnovation { .. })
        ));
    }

    #[test]
    fn recorded_replays_in_order() {
        let mut src = RecordedInnovations::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(src.draw(0.0, 1.0, 2).unwrap(), vec![1.0, 2.0]);
        assert_eq!(src.draw(0.0, 1.0, 3).unwrap(), vec![3.0, 4.0, 5.0]);
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn recorded_exhaustion_is_an_error() {
        let mut src = RecordedInnovations::constant(0.0, 4);
        let err = src.draw(0.0, 1.0, 5).unwrap_err();
        assert!(matches!(
            err,
            ArimaError::InsufficientInnovations {
                requested: 5,
                available: 4
            }
        ));
        // A failed draw consumes nothing.
        assert_eq!(src.remaining(), 4);
    }
}

//! ARIMA model with fixed parameters.

use ndarray::Array2;

use crate::error::ArimaError;
use crate::innovations::InnovationSource;
use crate::params::ArimaParams;
use crate::simulate::{simulate, simulate_paths};

/// An ARIMA(p, d, q) model with validated, fixed parameters.
///
/// Construction validates the parameters once; sampling delegates to
/// [`simulate`] with a fresh innovation draw per call.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsim_arima::{ArimaModel, ArimaParams, GaussianInnovations};
///
/// let model = ArimaModel::new(ArimaParams::new(vec![0.5], vec![0.2])).unwrap();
/// let mut rng = StdRng::seed_from_u64(1);
/// let xs = model.sample(30, &mut GaussianInnovations::new(&mut rng)).unwrap();
/// assert_eq!(xs.len(), 30);
/// assert_eq!((model.p(), model.q()), (1, 1));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ArimaModel {
    params: ArimaParams,
}

impl ArimaModel {
    /// Creates a model, validating `params`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ArimaParams::validate`] failure.
    pub fn new(params: ArimaParams) -> Result<Self, ArimaError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Returns the model parameters.
    pub fn params(&self) -> &ArimaParams {
        &self.params
    }

    /// Returns the AR order.
    pub fn p(&self) -> usize {
        self.params.p()
    }

    /// Returns the MA order (excluding the implicit leading coefficient).
    pub fn q(&self) -> usize {
        self.params.q()
    }

    /// Draws one sample path of `n` observations.
    pub fn sample(
        &self,
        n: usize,
        source: &mut impl InnovationSource,
    ) -> Result<Vec<f64>, ArimaError> {
        simulate(&self.params, n, source)
    }

    /// Draws `n_sim` independent sample paths as an `(n, n_sim)` matrix.
    pub fn sample_paths(
        &self,
        n: usize,
        n_sim: usize,
        source: &mut impl InnovationSource,
    ) -> Result<Array2<f64>, ArimaError> {
        simulate_paths(&self.params, n, n_sim, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::innovations::{GaussianInnovations, RecordedInnovations};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn orders_exposed() {
        let model = ArimaModel::new(ArimaParams::new(vec![0.1, 0.2], vec![0.3])).unwrap();
        assert_eq!(model.p(), 2);
        assert_eq!(model.q(), 1);
        assert_eq!(model.params().phi(), &[0.1, 0.2]);
    }

    #[test]
    fn new_rejects_invalid_params() {
        let err = ArimaModel::new(ArimaParams::new(vec![], vec![]).with_sigma(-2.0)).unwrap_err();
        assert!(matches!(err, ArimaError::InvalidSigma { .. }));
    }

    #[test]
    fn sample_delegates_to_simulate() {
        let params = ArimaParams::new(vec![0.5], vec![0.3]).with_d(1);
        let model = ArimaModel::new(params.clone()).unwrap();

        let mut rng1 = StdRng::seed_from_u64(11);
        let from_model = model
            .sample(40, &mut GaussianInnovations::new(&mut rng1))
            .unwrap();
        let mut rng2 = StdRng::seed_from_u64(11);
        let direct = simulate(&params, 40, &mut GaussianInnovations::new(&mut rng2)).unwrap();

        assert_eq!(from_model, direct);
    }

    #[test]
    fn repeated_samples_use_fresh_draws() {
        let model = ArimaModel::new(ArimaParams::new(vec![0.5], vec![])).unwrap();
        let mut src = GaussianInnovations::new(StdRng::seed_from_u64(4));
        let a = model.sample(20, &mut src).unwrap();
        let b = model.sample(20, &mut src).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn sample_paths_shape() {
        let model = ArimaModel::new(ArimaParams::new(vec![], vec![0.5])).unwrap();
        let mut src = RecordedInnovations::constant(1.0, 3 * model.params().total_len(8));
        let paths = model.sample_paths(8, 3, &mut src).unwrap();
        assert_eq!(paths.shape(), &[8, 3]);
        // MA(1) with unit shocks settles at 1 + 0.5.
        assert!(paths.iter().all(|&v| (v - 1.5).abs() < 1e-12));
    }
}

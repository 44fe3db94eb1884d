//! Adapter exposing a [`GaussianHmm`] as a blend component.

use rand::Rng;
use tsim_arima::SequenceGenerator;

use crate::model::GaussianHmm;

/// Owns a [`GaussianHmm`] and the RNG it samples with.
///
/// Implements [`SequenceGenerator`] by returning the emitted observations,
/// so it can be plugged into a `tsim_arima::BlendedModel`.
#[derive(Debug, Clone)]
pub struct HmmGenerator<R> {
    hmm: GaussianHmm,
    rng: R,
}

impl<R: Rng> HmmGenerator<R> {
    /// Pairs a model with an RNG.
    pub fn new(hmm: GaussianHmm, rng: R) -> Self {
        Self { hmm, rng }
    }

    /// Returns the wrapped model.
    pub fn hmm(&self) -> &GaussianHmm {
        &self.hmm
    }
}

impl<R: Rng> SequenceGenerator for HmmGenerator<R> {
    fn generate(&mut self, n: usize) -> Vec<f64> {
        self.hmm.sample(n, &mut self.rng).observations
    }
}

//! Convex blend of an ARIMA sample with an external sequence generator.

use std::fmt;

use crate::error::ArimaError;
use crate::innovations::InnovationSource;
use crate::model::ArimaModel;
use crate::params::ArimaParams;

/// Default weight on the ARIMA component of a blend.
pub const DEFAULT_TAU: f64 = 0.3;

/// Anything that can produce a sequence of a requested length.
///
/// This is the only capability a [`BlendedModel`] needs from its external
/// component (for example a fitted hidden Markov model).
pub trait SequenceGenerator {
    /// Generates a sequence of exactly `n` values.
    fn generate(&mut self, n: usize) -> Vec<f64>;
}

impl<G: SequenceGenerator + ?Sized> SequenceGenerator for Box<G> {
    fn generate(&mut self, n: usize) -> Vec<f64> {
        (**self).generate(n)
    }
}

/// Builder for [`BlendedModel`].
///
/// The external generator has no default and must be supplied with
/// [`BlendedModelBuilder::with_generator`].
///
/// # Example
///
/// ```
/// use tsim_arima::{ArimaError, ArimaParams, BlendedModelBuilder};
///
/// let err = BlendedModelBuilder::new(ArimaParams::new(vec![0.5], vec![]))
///     .with_tau(0.5)
///     .build()
///     .unwrap_err();
/// assert!(matches!(err, ArimaError::MissingGenerator));
/// ```
pub struct BlendedModelBuilder {
    params: ArimaParams,
    tau: f64,
    generator: Option<Box<dyn SequenceGenerator>>,
}

impl BlendedModelBuilder {
    /// Starts a builder with `tau = 0.3` and no generator.
    pub fn new(params: ArimaParams) -> Self {
        Self {
            params,
            tau: DEFAULT_TAU,
            generator: None,
        }
    }

    /// Sets the weight on the ARIMA component. The external component gets `1 - tau`.
    ///
    /// Values outside `[0, 1]` are accepted and extrapolate the blend.
    pub fn with_tau(mut self, tau: f64) -> Self {
        self.tau = tau;
        self
    }

    /// Sets the external sequence generator.
    pub fn with_generator(mut self, generator: impl SequenceGenerator + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    /// Builds the model.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::MissingGenerator`] | no generator was supplied |
    /// | [`ArimaError::NonFiniteParameter`] | `tau` is NaN or infinite |
    /// | any [`ArimaParams::validate`] error | invalid ARIMA parameters |
    pub fn build(self) -> Result<BlendedModel, ArimaError> {
        let model = ArimaModel::new(self.params)?;
        if !self.tau.is_finite() {
            return Err(ArimaError::NonFiniteParameter {
                name: "tau",
                value: self.tau,
            });
        }
        let generator = self.generator.ok_or(ArimaError::MissingGenerator)?;
        Ok(BlendedModel {
            model,
            tau: self.tau,
            generator,
        })
    }
}

/// `tau * ARIMA + (1 - tau) * external`, elementwise.
pub struct BlendedModel {
    model: ArimaModel,
    tau: f64,
    generator: Box<dyn SequenceGenerator>,
}

impl BlendedModel {
    /// Returns the ARIMA component.
    pub fn arima(&self) -> &ArimaModel {
        &self.model
    }

    /// Returns the mixing weight on the ARIMA component.
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Returns the AR order.
    pub fn p(&self) -> usize {
        self.model.p()
    }

    /// Returns the MA order.
    pub fn q(&self) -> usize {
        self.model.q()
    }

    /// Draws one blended sample of `n` observations.
    ///
    /// The external generator is asked for `n` values first; the ARIMA
    /// path is only simulated once that output has the right length, so a
    /// failed call never draws from `source`.
    ///
    /// # Errors
    ///
    /// [`ArimaError::ZeroLength`] if `n == 0`;
    /// [`ArimaError::GeneratorLengthMismatch`] if the generator returns the
    /// wrong number of values; simulation errors propagate.
    pub fn sample(
        &mut self,
        n: usize,
        source: &mut impl InnovationSource,
    ) -> Result<Vec<f64>, ArimaError> {
        if n == 0 {
            return Err(ArimaError::ZeroLength);
        }
        let external = self.generator.generate(n);
        if external.len() != n {
            return Err(ArimaError::GeneratorLengthMismatch {
                expected: n,
                got: external.len(),
            });
        }
        let arima = self.model.sample(n, source)?;
        let tau = self.tau;
        Ok(arima
            .iter()
            .zip(external.iter())
            .map(|(a, b)| tau * a + (1.0 - tau) * b)
            .collect())
    }
}

impl fmt::Debug for BlendedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlendedModel")
            .field("model", &self.model)
            .field("tau", &self.tau)
            .finish_non_exhaustive()
    }
}

//! Gaussian-emission hidden Markov model.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::HmmError;
use crate::simulate::simulate_states;
use crate::transition::{TransitionMatrix, validate_distribution};

/// A hidden Markov model with one Gaussian emission per hidden state.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsim_hmm::{GaussianHmm, TransitionMatrix};
///
/// let transitions = TransitionMatrix::from_rows(vec![
///     vec![0.95, 0.05],
///     vec![0.10, 0.90],
/// ])
/// .unwrap();
/// let hmm = GaussianHmm::new(vec![0.5, 0.5], transitions, vec![-1.0, 2.0], vec![0.5, 1.0])
///     .unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let sample = hmm.sample(100, &mut rng);
/// assert_eq!(sample.observations.len(), 100);
/// assert_eq!(sample.states.len(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct GaussianHmm {
    initial: Vec<f64>,
    transitions: TransitionMatrix,
    means: Vec<f64>,
    std_devs: Vec<f64>,
    emissions: Vec<Normal<f64>>,
}

/// Observations drawn from a [`GaussianHmm`] with the hidden path that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct HmmSample {
    /// Emitted values.
    pub observations: Vec<f64>,
    /// Zero-based hidden state at each step.
    pub states: Vec<usize>,
}

impl GaussianHmm {
    /// Creates a model from its initial distribution, transitions and
    /// per-state emission mean and standard deviation.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`HmmError::ShapeMismatch`] | `initial`, `means` or `std_devs` length differs from the number of states |
    /// | [`HmmError::InvalidProbability`] | `initial` or a transition row is not a distribution |
    /// | [`HmmError::NonFiniteMean`] | a mean is NaN or infinite |
    /// | [`HmmError::InvalidStdDev`] | a std dev is not finite and positive |
    pub fn new(
        initial: Vec<f64>,
        transitions: TransitionMatrix,
        means: Vec<f64>,
        std_devs: Vec<f64>,
    ) -> Result<Self, HmmError> {
        let k = transitions.n_states();
        for (what, len) in [
            ("initial", initial.len()),
            ("means", means.len()),
            ("std_devs", std_devs.len()),
        ] {
            if len != k {
                return Err(HmmError::ShapeMismatch {
                    what,
                    expected: k,
                    got: len,
                });
            }
        }
        validate_distribution(&initial, "initial")?;
        transitions.validate()?;

        let mut emissions = Vec::with_capacity(k);
        for (state, (&mean, &sd)) in means.iter().zip(std_devs.iter()).enumerate() {
            if !mean.is_finite() {
                return Err(HmmError::NonFiniteMean { state });
            }
            if !sd.is_finite() || sd <= 0.0 {
                return Err(HmmError::InvalidStdDev { state, value: sd });
            }
            let normal =
                Normal::new(mean, sd).map_err(|_| HmmError::InvalidStdDev { state, value: sd })?;
            emissions.push(normal);
        }

        Ok(Self {
            initial,
            transitions,
            means,
            std_devs,
            emissions,
        })
    }

    /// Returns the number of hidden states.
    pub fn n_states(&self) -> usize {
        self.transitions.n_states()
    }

    /// Returns the initial state distribution.
    pub fn initial(&self) -> &[f64] {
        &self.initial
    }

    /// Returns the transition matrix.
    pub fn transitions(&self) -> &TransitionMatrix {
        &self.transitions
    }

    /// Returns the emission means.
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Returns the emission standard deviations.
    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs
    }

    /// Draws one emission from `state`.
    pub(crate) fn emit(&self, state: usize, rng: &mut impl Rng) -> f64 {
        self.emissions[state].sample(rng)
    }

    /// Samples a hidden path of length `n` and one emission per step.
    pub fn sample(&self, n: usize, rng: &mut impl Rng) -> HmmSample {
        let states = simulate_states(self, n, rng);
        let observations = states.iter().map(|&s| self.emit(s, rng)).collect();
        HmmSample {
            observations,
            states,
        }
    }
}

//! Row-stochastic transition matrices and categorical sampling.

use crate::error::HmmError;

/// Tolerance on probability vectors summing to one.
const SUM_TOLERANCE: f64 = 1e-6;

/// A `K x K` row-stochastic transition matrix.
///
/// Row `i` holds the probabilities of moving from state `i` to each state.
/// Stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    n_states: usize,
    probs: Vec<f64>,
}

impl TransitionMatrix {
    /// Builds a matrix from rows, validating that it is square and row-stochastic.
    ///
    /// # Errors
    ///
    /// [`HmmError::NoStates`] for an empty matrix, [`HmmError::ShapeMismatch`]
    /// for a ragged one, [`HmmError::InvalidProbability`] if any row is not a
    /// probability distribution.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, HmmError> {
        let n_states = rows.len();
        if n_states == 0 {
            return Err(HmmError::NoStates);
        }
        let mut probs = Vec::with_capacity(n_states * n_states);
        for row in rows {
            if row.len() != n_states {
                return Err(HmmError::ShapeMismatch {
                    what: "transition row",
                    expected: n_states,
                    got: row.len(),
                });
            }
            probs.extend(row);
        }
        let matrix = Self { n_states, probs };
        matrix.validate()?;
        Ok(matrix)
    }

    /// The identity matrix: every state persists forever.
    pub fn identity(n_states: usize) -> Self {
        let mut probs = vec![0.0; n_states * n_states];
        for i in 0..n_states {
            probs[i * n_states + i] = 1.0;
        }
        Self { n_states, probs }
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.n_states
    }

    /// Returns the transition probabilities out of state `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from >= n_states()`.
    pub fn row(&self, from: usize) -> &[f64] {
        let start = from * self.n_states;
        &self.probs[start..start + self.n_states]
    }

    /// Returns the probability of moving from `from` to `to`.
    pub fn prob(&self, from: usize, to: usize) -> f64 {
        self.row(from)[to]
    }

    /// Validates that every row is a probability distribution.
    pub fn validate(&self) -> Result<(), HmmError> {
        for i in 0..self.n_states {
            validate_distribution(self.row(i), &format!("transition row {i}"))?;
        }
        Ok(())
    }

    /// Samples the next state given the current state.
    pub fn sample(&self, from: usize, rng: &mut impl rand::Rng) -> usize {
        sample_categorical(self.row(from), rng)
    }
}

/// Checks that `probs` is finite, within `[0, 1]` and sums to ~1.
pub(crate) fn validate_distribution(probs: &[f64], name: &str) -> Result<(), HmmError> {
    let mut sum = 0.0;
    for (j, &p) in probs.iter().enumerate() {
        if !p.is_finite() {
            return Err(HmmError::InvalidProbability {
                reason: format!("{name}[{j}] is not finite: {p}"),
            });
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(HmmError::InvalidProbability {
                reason: format!("{name}[{j}] = {p} is outside [0, 1]"),
            });
        }
        sum += p;
    }
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(HmmError::InvalidProbability {
            reason: format!("{name} sums to {sum}, expected ~1.0"),
        });
    }
    Ok(())
}

/// Draws an index from a categorical distribution by walking its CDF.
///
/// Zero-probability entries are never selected.
///
/// Falls back to the last index if rounding leaves the cumulative sum just
/// below the uniform draw.
pub(crate) fn sample_categorical(probs: &[f64], rng: &mut impl rand::Rng) -> usize {
    let u: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, &p) in probs.iter().enumerate() {
        cumulative += p;
        if cumulative > u {
            return i;
        }
    }
    probs.len().saturating_sub(1)
}

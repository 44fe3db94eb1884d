//! Hidden state path simulation.

use crate::model::GaussianHmm;
use crate::transition::sample_categorical;

/// Simulates a hidden state path of length `n`.
///
/// The first state is drawn from the initial distribution; each later state
/// from the transition row of its predecessor.
pub fn simulate_states(hmm: &GaussianHmm, n: usize, rng: &mut impl rand::Rng) -> Vec<usize> {
    let mut out = vec![0; n];
    simulate_states_into(hmm, rng, &mut out);
    out
}

/// Simulates a hidden state path into a pre-allocated buffer.
///
/// The buffer length is the path length; an empty buffer draws nothing.
pub fn simulate_states_into(hmm: &GaussianHmm, rng: &mut impl rand::Rng, out: &mut [usize]) {
    let Some((first, rest)) = out.split_first_mut() else {
        return;
    };
    *first = sample_categorical(hmm.initial(), rng);
    let mut prev = *first;
    for slot in rest {
        let next = hmm.transitions().sample(prev, rng);
        *slot = next;
        prev = next;
    }
}

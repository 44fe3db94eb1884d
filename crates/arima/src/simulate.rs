//! ARIMA sample-path generation.

use ndarray::Array2;
use tracing::debug;

use crate::error::ArimaError;
use crate::innovations::InnovationSource;
use crate::integrate::integrate_in_place;
use crate::params::ArimaParams;

/// Simulates one ARIMA sample path of length `n`.
///
/// Draws `n + max(p, q + 1) + burn` innovations from `source`, runs the
/// ARMA recurrence over all of them, keeps the last `n` values and
/// integrates them `d` times.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`ArimaError::ZeroLength`] | `n == 0` |
/// | [`ArimaError::InvalidSigma`] | `sigma` not finite and positive |
/// | [`ArimaError::NonFiniteParameter`] | `mu` or `trend` not finite |
/// | [`ArimaError::NonFiniteCoefficient`] | any `phi`/`theta` not finite |
/// | [`ArimaError::InsufficientInnovations`] | `source` cannot supply enough draws |
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsim_arima::{ArimaParams, GaussianInnovations, simulate};
///
/// let params = ArimaParams::new(vec![0.6], vec![0.3]);
/// let mut rng = StdRng::seed_from_u64(42);
/// let path = simulate(&params, 20, &mut GaussianInnovations::new(&mut rng)).unwrap();
/// assert_eq!(path.len(), 20);
/// ```
pub fn simulate(
    params: &ArimaParams,
    n: usize,
    source: &mut impl InnovationSource,
) -> Result<Vec<f64>, ArimaError> {
    if n == 0 {
        return Err(ArimaError::ZeroLength);
    }
    let mut out = vec![0.0; n];
    simulate_into(params, source, &mut out)?;
    Ok(out)
}

/// Simulates one ARIMA sample path into a pre-allocated buffer.
///
/// The buffer length is the number of retained observations `n`.
///
/// # Errors
///
/// Same as [`simulate`]; an empty `out` yields [`ArimaError::ZeroLength`].
pub fn simulate_into(
    params: &ArimaParams,
    source: &mut impl InnovationSource,
    out: &mut [f64],
) -> Result<(), ArimaError> {
    let n = out.len();
    if n == 0 {
        return Err(ArimaError::ZeroLength);
    }
    params.validate()?;

    let total = params.total_len(n);
    let innovations = source.draw(params.mu(), params.sigma(), total)?;
    if innovations.len() < total {
        return Err(ArimaError::InsufficientInnovations {
            requested: total,
            available: innovations.len(),
        });
    }

    let path = arma_recurrence(
        params.phi(),
        &params.effective_theta(),
        params.trend(),
        &innovations[..total],
    );
    out.copy_from_slice(&path[total - n..]);
    integrate_in_place(out, params.d());

    debug!(
        n,
        total,
        p = params.p(),
        q = params.q(),
        d = params.d(),
        "simulated ARIMA path"
    );
    Ok(())
}

/// Simulates `n_sim` independent sample paths of length `n`.
///
/// Returns an [`Array2<f64>`] with shape `(n, n_sim)`; each column is one
/// realisation, drawn in column order from `source`.
///
/// # Errors
///
/// Same as [`simulate`].
pub fn simulate_paths(
    params: &ArimaParams,
    n: usize,
    n_sim: usize,
    source: &mut impl InnovationSource,
) -> Result<Array2<f64>, ArimaError> {
    if n == 0 {
        return Err(ArimaError::ZeroLength);
    }
    let mut output = Array2::zeros((n, n_sim));
    let mut buf = vec![0.0; n];
    for sim in 0..n_sim {
        simulate_into(params, source, &mut buf)?;
        for (i, &val) in buf.iter().enumerate() {
            output[[i, sim]] = val;
        }
    }
    Ok(output)
}

/// Runs the ARMA recurrence over the full innovation sequence `a`.
///
/// `x[0] = a[0]`; for `i >= 1`,
/// `x[i] = sum_k phi[k] * x[i-1-k] + sum_k theta_eff[k] * a[i-k] + trend`,
/// where the AR sum runs over the `min(i, p)` most recent values and the MA
/// sum over the `min(i + 1, q)` most recent innovations. Index 0 of each
/// coefficient vector always multiplies the most recent lag; near the start
/// the sums simply have fewer terms.
pub(crate) fn arma_recurrence(phi: &[f64], theta_eff: &[f64], trend: f64, a: &[f64]) -> Vec<f64> {
    let mut x = vec![0.0; a.len()];
    let Some(&first) = a.first() else {
        return x;
    };
    x[0] = first;

    for i in 1..a.len() {
        let ar: f64 = phi
            .iter()
            .take(i)
            .enumerate()
            .map(|(k, c)| c * x[i - 1 - k])
            .sum();
        let ma: f64 = theta_eff
            .iter()
            .take(i + 1)
            .enumerate()
            .map(|(k, c)| c * a[i - k])
            .sum();
        x[i] = ar + ma + trend;
    }
    x
}

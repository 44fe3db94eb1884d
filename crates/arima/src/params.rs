//! ARIMA model parameters.

use crate::error::ArimaError;

/// Default burn-in length discarded from the front of every sample path.
pub const DEFAULT_BURN: usize = 10;

/// Parameters of an ARIMA(p, d, q) process with Gaussian innovations.
///
/// The AR order `p` and MA order `q` are derived from the coefficient
/// vectors and cannot be changed independently. The MA coefficients exclude
/// the implicit leading `1` that multiplies the current innovation.
///
/// Parameters are plain values: every builder call consumes `self` and
/// returns a new value, so no coefficient storage is shared between models.
///
/// # Example
///
/// ```
/// use tsim_arima::ArimaParams;
///
/// let params = ArimaParams::new(vec![0.5, -0.2], vec![0.4])
///     .with_d(1)
///     .with_sigma(2.0);
/// assert_eq!(params.p(), 2);
/// assert_eq!(params.q(), 1);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ArimaParams {
    phi: Vec<f64>,
    theta: Vec<f64>,
    d: usize,
    trend: f64,
    mu: f64,
    sigma: f64,
    burn: usize,
}

impl ArimaParams {
    /// Creates parameters from AR coefficients `phi` and MA coefficients `theta`.
    ///
    /// Defaults: `d = 0`, `trend = 0`, `mu = 0`, `sigma = 1`, `burn = 10`.
    pub fn new(phi: Vec<f64>, theta: Vec<f64>) -> Self {
        Self {
            phi,
            theta,
            d: 0,
            trend: 0.0,
            mu: 0.0,
            sigma: 1.0,
            burn: DEFAULT_BURN,
        }
    }

    /// Sets the integration order.
    pub fn with_d(mut self, d: usize) -> Self {
        self.d = d;
        self
    }

    /// Sets the deterministic increment added at every step after the first.
    pub fn with_trend(mut self, trend: f64) -> Self {
        self.trend = trend;
        self
    }

    /// Sets the innovation mean.
    pub fn with_mu(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    /// Sets the innovation standard deviation.
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Sets the number of leading values discarded as burn-in.
    pub fn with_burn(mut self, burn: usize) -> Self {
        self.burn = burn;
        self
    }

    // --- Accessors ---

    /// Returns the AR coefficients (`phi`).
    pub fn phi(&self) -> &[f64] {
        &self.phi
    }

    /// Returns the MA coefficients (`theta`), without the implicit leading `1`.
    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    /// Returns the AR order.
    pub fn p(&self) -> usize {
        self.phi.len()
    }

    /// Returns the MA order.
    pub fn q(&self) -> usize {
        self.theta.len()
    }

    /// Returns the integration order.
    pub fn d(&self) -> usize {
        self.d
    }

    /// Returns the per-step trend increment.
    pub fn trend(&self) -> f64 {
        self.trend
    }

    /// Returns the innovation mean.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Returns the innovation standard deviation.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Returns the burn-in length.
    pub fn burn(&self) -> usize {
        self.burn
    }

    /// MA coefficients with the current-innovation weight prepended: `[1, theta...]`.
    pub(crate) fn effective_theta(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.theta.len() + 1);
        out.push(1.0);
        out.extend_from_slice(&self.theta);
        out
    }

    /// Number of innovations drawn to produce `n` retained observations:
    /// `n + max(p, q + 1) + burn`.
    pub fn total_len(&self, n: usize) -> usize {
        n + self.p().max(self.q() + 1) + self.burn
    }

    /// Validates these parameters.
    ///
    /// Checks that `sigma` is finite and positive, `mu` and `trend` are
    /// finite, and every AR/MA coefficient is finite.
    pub fn validate(&self) -> Result<(), ArimaError> {
        if !self.sigma.is_finite() || self.sigma <= 0.0 {
            return Err(ArimaError::InvalidSigma { sigma: self.sigma });
        }
        if !self.mu.is_finite() {
            return Err(ArimaError::NonFiniteParameter {
                name: "mu",
                value: self.mu,
            });
        }
        if !self.trend.is_finite() {
            return Err(ArimaError::NonFiniteParameter {
                name: "trend",
                value: self.trend,
            });
        }
        Self::validate_coefficients(&self.phi, "phi")?;
        Self::validate_coefficients(&self.theta, "theta")?;
        Ok(())
    }

    fn validate_coefficients(coeffs: &[f64], which: &'static str) -> Result<(), ArimaError> {
        match coeffs.iter().position(|c| !c.is_finite()) {
            Some(index) => Err(ArimaError::NonFiniteCoefficient { which, index }),
            None => Ok(()),
        }
    }
}

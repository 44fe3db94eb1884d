//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use tsim_arima::ArimaParams;
use tsim_hmm::{GaussianHmm, TransitionMatrix};
use tsim_stats::{LagPolicy, SacfConfig};

/// Parses a lag policy name string into the corresponding enum variant.
pub fn parse_lag_policy(s: &str) -> Result<LagPolicy> {
    match s.to_lowercase().as_str() {
        "warn" => Ok(LagPolicy::Warn),
        "clamp" => Ok(LagPolicy::Clamp),
        "reject" => Ok(LagPolicy::Reject),
        other => bail!("unknown lag policy: {other:?}"),
    }
}

/// Builds validated [`ArimaParams`] from the `[model]` section.
pub fn build_arima_params(model: &ModelToml) -> Result<ArimaParams> {
    let params = ArimaParams::new(model.phi.clone(), model.theta.clone())
        .with_d(model.d)
        .with_trend(model.trend)
        .with_mu(model.mu)
        .with_sigma(model.sigma)
        .with_burn(model.burn);
    params.validate().context("invalid [model] parameters")?;
    Ok(params)
}

/// Builds a [`GaussianHmm`] from the `[blend.hmm]` section.
pub fn build_hmm(hmm: &HmmToml) -> Result<GaussianHmm> {
    let transitions = TransitionMatrix::from_rows(hmm.transitions.clone())
        .context("invalid [blend.hmm] transitions")?;
    GaussianHmm::new(
        hmm.initial.clone(),
        transitions,
        hmm.means.clone(),
        hmm.std_devs.clone(),
    )
    .context("invalid [blend.hmm] model")
}

/// Builds a [`SacfConfig`] from the `[sacf]` section, with an optional
/// CLI override for the lag length.
pub fn build_sacf_config(sacf: &SacfToml, max_lag: Option<usize>) -> Result<SacfConfig> {
    let cfg = SacfConfig::new()
        .with_max_lag(max_lag.unwrap_or(sacf.max_lag))
        .with_lag_policy(parse_lag_policy(&sacf.lag_policy)?);
    cfg.validate().context("invalid [sacf] settings")?;
    Ok(cfg)
}

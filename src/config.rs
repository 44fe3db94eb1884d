use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level tsim configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TsimConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// ARIMA parameters.
    pub model: ModelToml,

    /// Optional blend with an HMM generator.
    #[serde(default)]
    pub blend: Option<BlendToml>,

    /// SACF settings.
    #[serde(default)]
    pub sacf: SacfToml,

    /// Sample sizes.
    #[serde(default)]
    pub output: OutputToml,
}

impl TsimConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default)]
    pub phi: Vec<f64>,
    #[serde(default)]
    pub theta: Vec<f64>,
    #[serde(default)]
    pub d: usize,
    #[serde(default)]
    pub trend: f64,
    #[serde(default)]
    pub mu: f64,
    #[serde(default = "default_sigma")]
    pub sigma: f64,
    #[serde(default = "default_burn")]
    pub burn: usize,
}

fn default_sigma() -> f64 {
    1.0
}
fn default_burn() -> usize {
    tsim_arima::DEFAULT_BURN
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlendToml {
    #[serde(default = "default_tau")]
    pub tau: f64,
    /// External generator; a blend without one is rejected at build time.
    #[serde(default)]
    pub hmm: Option<HmmToml>,
}

fn default_tau() -> f64 {
    tsim_arima::DEFAULT_TAU
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HmmToml {
    pub initial: Vec<f64>,
    pub transitions: Vec<Vec<f64>>,
    pub means: Vec<f64>,
    pub std_devs: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SacfToml {
    #[serde(default = "default_max_lag")]
    pub max_lag: usize,
    #[serde(default = "default_lag_policy")]
    pub lag_policy: String,
}

impl Default for SacfToml {
    fn default() -> Self {
        Self {
            max_lag: default_max_lag(),
            lag_policy: default_lag_policy(),
        }
    }
}

fn default_max_lag() -> usize {
    tsim_stats::DEFAULT_MAX_LAG
}
fn default_lag_policy() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_n")]
    pub n: usize,
    #[serde(default = "default_n_sim")]
    pub n_sim: usize,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            n: default_n(),
            n_sim: default_n_sim(),
        }
    }
}

fn default_n() -> usize {
    20
}
fn default_n_sim() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg: TsimConfig = toml::from_str("[model]\nphi = [0.5]\n").unwrap();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.model.phi, vec![0.5]);
        assert!(cfg.model.theta.is_empty());
        assert_eq!(cfg.model.d, 0);
        assert_eq!(cfg.model.sigma, 1.0);
        assert_eq!(cfg.model.burn, 10);
        assert!(cfg.blend.is_none());
        assert_eq!(cfg.sacf.max_lag, 10);
        assert_eq!(cfg.sacf.lag_policy, "warn");
        assert_eq!(cfg.output.n, 20);
        assert_eq!(cfg.output.n_sim, 1);
    }

    #[test]
    fn full_config() {
        let text = r#"
seed = 7

[model]
phi = [0.5, -0.2]
theta = [0.3]
d = 1
trend = 0.1
mu = 0.5
sigma = 2.0
burn = 50

[blend]
tau = 0.6

[blend.hmm]
initial = [0.5, 0.5]
transitions = [[0.9, 0.1], [0.2, 0.8]]
means = [0.0, 4.0]
std_devs = [1.0, 1.5]

[sacf]
max_lag = 15
lag_policy = "clamp"

[output]
n = 500
n_sim = 8
"#;
        let cfg: TsimConfig = toml::from_str(text).unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.model.theta, vec![0.3]);
        assert_eq!(cfg.model.d, 1);
        let blend = cfg.blend.unwrap();
        assert_eq!(blend.tau, 0.6);
        let hmm = blend.hmm.unwrap();
        assert_eq!(hmm.transitions.len(), 2);
        assert_eq!(hmm.std_devs, vec![1.0, 1.5]);
        assert_eq!(cfg.sacf.max_lag, 15);
        assert_eq!(cfg.sacf.lag_policy, "clamp");
        assert_eq!(cfg.output.n_sim, 8);
    }

    #[test]
    fn blend_without_hmm_parses() {
        let cfg: TsimConfig = toml::from_str("[model]\n[blend]\ntau = 0.5\n").unwrap();
        let blend = cfg.blend.unwrap();
        assert_eq!(blend.tau, 0.5);
        assert!(blend.hmm.is_none());
    }

    #[test]
    fn unknown_field_rejected() {
        let res: Result<TsimConfig, _> = toml::from_str("[model]\nphi = []\nbogus = 1\n");
        assert!(res.is_err());
    }

    #[test]
    fn model_section_required() {
        let res: Result<TsimConfig, _> = toml::from_str("seed = 1\n");
        assert!(res.is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 3\n[model]\ntheta = [0.4]").unwrap();
        let cfg = TsimConfig::load(file.path()).unwrap();
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.model.theta, vec![0.4]);
    }

    #[test]
    fn load_missing_file() {
        let err = TsimConfig::load(Path::new("/nonexistent/tsim.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}

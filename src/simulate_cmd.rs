//! Simulate command: draw ARIMA (or blended) paths and write them as JSON.

use std::path::Path;

use anyhow::{Context, Result};
use ndarray::{Array2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, info_span};

use tsim_arima::{ArimaModel, BlendedModelBuilder, GaussianInnovations};
use tsim_hmm::HmmGenerator;

use crate::cli::SimulateArgs;
use crate::config::TsimConfig;
use crate::convert;

/// Paths drawn by one run, in the shape written to disk.
#[derive(Debug, Serialize)]
pub struct SimulationOutput {
    pub n: usize,
    pub n_sim: usize,
    pub blended: bool,
    /// One inner vector per path.
    pub paths: Vec<Vec<f64>>,
}

impl SimulationOutput {
    /// Converts an `(n, n_sim)` matrix into column-major path vectors.
    pub fn from_matrix(paths: &Array2<f64>, blended: bool) -> Self {
        Self {
            n: paths.nrows(),
            n_sim: paths.ncols(),
            blended,
            paths: paths
                .axis_iter(Axis(1))
                .map(|col| col.to_vec())
                .collect(),
        }
    }
}

/// Simulated paths plus whether the blend section was applied.
#[derive(Debug)]
pub struct Simulated {
    pub paths: Array2<f64>,
    pub blended: bool,
}

/// Draws `n_sim` paths of length `n` from the configured model.
///
/// When a `[blend]` section is present every path is a blended sample;
/// the HMM generator gets its own RNG stream seeded from `rng`.
pub fn simulate_from_config(
    config: &TsimConfig,
    n: usize,
    n_sim: usize,
    mut rng: StdRng,
) -> Result<Simulated> {
    let params = convert::build_arima_params(&config.model)?;
    info!(
        p = params.p(),
        q = params.q(),
        d = params.d(),
        burn = params.burn(),
        "model parameters loaded"
    );

    let Some(blend) = &config.blend else {
        let model = ArimaModel::new(params)?;
        let mut source = GaussianInnovations::new(rng);
        let paths = model
            .sample_paths(n, n_sim, &mut source)
            .context("ARIMA simulation failed")?;
        return Ok(Simulated {
            paths,
            blended: false,
        });
    };

    let mut builder = BlendedModelBuilder::new(params).with_tau(blend.tau);
    if let Some(hmm_toml) = &blend.hmm {
        let hmm = convert::build_hmm(hmm_toml)?;
        debug!(n_states = hmm.n_states(), "HMM generator built");
        let generator_rng = StdRng::seed_from_u64(rng.random());
        builder = builder.with_generator(HmmGenerator::new(hmm, generator_rng));
    }
    let mut model = builder.build().context("invalid [blend] section")?;
    info!(tau = model.tau(), "blending with HMM generator");

    let mut source = GaussianInnovations::new(rng);
    let mut paths = Array2::zeros((n, n_sim));
    for (j, mut col) in paths.axis_iter_mut(Axis(1)).enumerate() {
        let path = model
            .sample(n, &mut source)
            .with_context(|| format!("blended simulation failed on path {j}"))?;
        for (dst, v) in col.iter_mut().zip(path) {
            *dst = v;
        }
    }
    Ok(Simulated {
        paths,
        blended: true,
    })
}

/// Seeds from `seed` when given, else from the OS.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Writes `output` as pretty JSON to `path`, or to stdout when `None`.
fn write_output(output: &SimulationOutput, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(output).context("failed to serialize paths")?;
    match path {
        Some(p) => {
            std::fs::write(p, json)
                .with_context(|| format!("failed to write output: {}", p.display()))?;
            info!(path = %p.display(), "paths written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Run the simulate command.
pub fn run(args: SimulateArgs) -> Result<()> {
    let _cmd = info_span!("simulate").entered();

    let config = TsimConfig::load(&args.config)?;
    let n = args.n.unwrap_or(config.output.n);
    let n_sim = args.n_sim.unwrap_or(config.output.n_sim);
    let rng = make_rng(args.seed.or(config.seed));

    let simulated = simulate_from_config(&config, n, n_sim, rng)?;
    info!(n, n_sim, blended = simulated.blended, "simulation complete");

    let output = SimulationOutput::from_matrix(&simulated.paths, simulated.blended);
    write_output(&output, args.output.as_deref())
}

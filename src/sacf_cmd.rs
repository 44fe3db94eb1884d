//! SACF command: simulate from a config and print the autocorrelation table.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tsim_stats::{SacfTable, sacf};

use crate::cli::SacfArgs;
use crate::config::TsimConfig;
use crate::convert;
use crate::simulate_cmd::{make_rng, simulate_from_config};

/// Run the sacf command.
pub fn run(args: SacfArgs) -> Result<()> {
    let _cmd = info_span!("sacf").entered();

    let config = TsimConfig::load(&args.config)?;
    let sacf_cfg = convert::build_sacf_config(&config.sacf, args.lags)?;
    let n = args.n.unwrap_or(config.output.n);
    let n_sim = args.n_sim.unwrap_or(config.output.n_sim);
    let rng = make_rng(args.seed.or(config.seed));

    let simulated = simulate_from_config(&config, n, n_sim, rng)?;
    let table = sacf(simulated.paths.view(), &sacf_cfg).context("SACF estimation failed")?;
    info!(
        lags = table.nrows(),
        series = table.ncols(),
        "autocorrelation estimated"
    );

    println!("{}", SacfTable::new(table.view()));
    Ok(())
}

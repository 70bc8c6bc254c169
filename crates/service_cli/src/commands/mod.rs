//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Flags shared by every
//! command live in [`RunArgs`] and override the loaded settings.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::Args;
use infra_config::Settings;
use pathsim_engine::mc::{MonteCarloConfig, MonteCarloSimulator, SimulationRun};
use pathsim_models::models::GeometricBrownianMotion;
use tracing::info;

use crate::Result;

pub mod check;
pub mod paths;
pub mod simulate;
pub mod stats;

/// Process, grid and band flags. Unset flags fall back to settings.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Initial value
    #[arg(long)]
    pub s0: Option<f64>,

    /// Drift
    #[arg(long, allow_hyphen_values = true)]
    pub mu: Option<f64>,

    /// Volatility
    #[arg(long)]
    pub sigma: Option<f64>,

    /// Number of paths
    #[arg(long)]
    pub n_paths: Option<usize>,

    /// Number of time steps
    #[arg(long)]
    pub n_steps: Option<usize>,

    /// Time increment per step, in years
    #[arg(long)]
    pub dt: Option<f64>,

    /// RNG seed (fresh entropy when unset)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lower percentile of the band
    #[arg(long)]
    pub p_low: Option<f64>,

    /// Upper percentile of the band
    #[arg(long)]
    pub p_high: Option<f64>,
}

impl RunArgs {
    /// Applies the flags on top of `settings` and validates the result.
    pub fn resolve(&self, settings: &Settings) -> Result<Settings> {
        let mut resolved = settings.clone();
        let sim = &mut resolved.simulation;
        if let Some(s0) = self.s0 {
            sim.s0 = s0;
        }
        if let Some(mu) = self.mu {
            sim.mu = mu;
        }
        if let Some(sigma) = self.sigma {
            sim.sigma = sigma;
        }
        if let Some(n_paths) = self.n_paths {
            sim.n_paths = n_paths;
        }
        if let Some(n_steps) = self.n_steps {
            sim.n_steps = n_steps;
        }
        if let Some(dt) = self.dt {
            sim.dt = dt;
        }
        if self.seed.is_some() {
            sim.seed = self.seed;
        }
        if let Some(p_low) = self.p_low {
            resolved.statistics.p_low = p_low;
        }
        if let Some(p_high) = self.p_high {
            resolved.statistics.p_high = p_high;
        }
        resolved.validate()?;
        Ok(resolved)
    }
}

/// Builds the process from `settings` and runs one simulation.
pub(crate) fn simulate(
    settings: &Settings,
) -> Result<(MonteCarloSimulator<GeometricBrownianMotion>, SimulationRun)> {
    let sim = &settings.simulation;
    let process = GeometricBrownianMotion::new(sim.s0, sim.mu, sim.sigma)?;
    let config = MonteCarloConfig::builder()
        .n_paths(sim.n_paths)
        .n_steps(sim.n_steps)
        .dt(sim.dt)
        .maybe_seed(sim.seed)
        .build()?;

    info!(
        "Simulating {} paths x {} steps (s0={}, mu={}, sigma={}, dt={})",
        sim.n_paths, sim.n_steps, sim.s0, sim.mu, sim.sigma, sim.dt
    );

    let simulator = MonteCarloSimulator::new(process);
    let run = simulator.run_with_config(&config)?;
    info!("Seed: {}", run.seed);
    Ok((simulator, run))
}

/// Stdout, or a buffered file when `output` is given.
pub(crate) fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => {
            info!("Writing output to {}", path.display());
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(io::stdout().lock()),
    })
}

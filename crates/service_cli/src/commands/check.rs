//! Check command implementation
//!
//! Prints the effective settings and validates them.

use std::io::Write;

use infra_config::Settings;
use pathsim_engine::mc::{MonteCarloConfig, MAX_PATHS, MAX_STEPS};
use pathsim_models::models::GeometricBrownianMotion;
use tracing::info;

use crate::Result;

/// Writes the settings report and validates every layer.
///
/// Validation runs the settings bounds, the process constructor and the
/// run-configuration builder, so anything `simulate` would reject fails here.
pub fn report(settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let sim = &settings.simulation;

    writeln!(out, "pathsim System Check")?;
    writeln!(out, "====================")?;
    writeln!(out)?;

    writeln!(out, "Process (GBM):")?;
    writeln!(out, "  s0:    {}", sim.s0)?;
    writeln!(out, "  mu:    {}", sim.mu)?;
    writeln!(out, "  sigma: {}", sim.sigma)?;
    writeln!(out)?;

    writeln!(out, "Grid:")?;
    writeln!(out, "  n_paths: {} (max {})", sim.n_paths, MAX_PATHS)?;
    writeln!(out, "  n_steps: {} (max {})", sim.n_steps, MAX_STEPS)?;
    writeln!(out, "  dt:      {}", sim.dt)?;
    match sim.seed {
        Some(seed) => writeln!(out, "  seed:    {}", seed)?,
        None => writeln!(out, "  seed:    (entropy)")?,
    }
    writeln!(out)?;

    writeln!(out, "Statistics:")?;
    writeln!(
        out,
        "  band: p{} .. p{}",
        settings.statistics.p_low, settings.statistics.p_high
    )?;
    writeln!(out)?;

    writeln!(out, "Parallelisation:")?;
    writeln!(out, "  Configured threads: {}", settings.engine.thread_pool_size)?;
    writeln!(out, "  Rayon threads: {}", rayon::current_num_threads())?;
    writeln!(out, "  CPU cores: {}", num_cpus::get())?;
    writeln!(out)?;

    settings.validate()?;
    GeometricBrownianMotion::new(sim.s0, sim.mu, sim.sigma)?;
    let config = MonteCarloConfig::builder()
        .n_paths(sim.n_paths)
        .n_steps(sim.n_steps)
        .dt(sim.dt)
        .maybe_seed(sim.seed)
        .build()?;

    writeln!(
        out,
        "Horizon: {:.4} years, path matrix ~{} bytes",
        config.horizon(),
        config.memory_footprint() * std::mem::size_of::<f64>()
    )?;
    writeln!(out)?;
    writeln!(out, "All checks passed!")?;
    Ok(())
}

/// Run the check command
pub fn run(settings: &Settings) -> Result<()> {
    info!("Checking system configuration...");
    let mut out = super::open_output(None)?;
    report(settings, &mut *out)?;
    out.flush()?;
    Ok(())
}

//! Simulate command implementation
//!
//! Runs one simulation and summarises the terminal cross-section against the
//! closed-form GBM moments.

use std::io::Write;

use infra_config::Settings;
use pathsim_core::math::{mean, median_sorted, percentile_sorted, sort_column};
use pathsim_engine::statistics::percentile_label;
use pathsim_models::models::GeometricBrownianMotion;
use serde::Serialize;
use tracing::info;

use crate::{CliError, Result};

/// Terminal-value summary of one run.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TerminalSummary {
    pub n_paths: usize,
    pub n_steps: usize,
    pub horizon: f64,
    pub seed: u64,
    pub mean: f64,
    pub median: f64,
    pub p_low: f64,
    pub p_high: f64,
    pub low: f64,
    pub high: f64,
    pub min: f64,
    pub max: f64,
    pub expected_mean: f64,
    pub expected_std: f64,
}

impl TerminalSummary {
    fn from_terminal(
        terminal: &mut [f64],
        process: &GeometricBrownianMotion,
        settings: &Settings,
        seed: u64,
    ) -> Self {
        let horizon = settings.simulation.n_steps as f64 * settings.simulation.dt;
        let (p_low, p_high) = (settings.statistics.p_low, settings.statistics.p_high);
        let average = mean(terminal);
        sort_column(terminal);
        Self {
            n_paths: terminal.len(),
            n_steps: settings.simulation.n_steps,
            horizon,
            seed,
            mean: average,
            median: median_sorted(terminal),
            p_low,
            p_high,
            low: percentile_sorted(terminal, p_low),
            high: percentile_sorted(terminal, p_high),
            min: terminal.first().copied().unwrap_or(f64::NAN),
            max: terminal.last().copied().unwrap_or(f64::NAN),
            expected_mean: process.expected_value(horizon),
            expected_std: process.variance(horizon).sqrt(),
        }
    }

    fn write_table(&self, out: &mut dyn Write) -> Result<()> {
        let low = percentile_label(self.p_low);
        let high = percentile_label(self.p_high);
        writeln!(
            out,
            "Terminal values ({} paths, {} steps, T = {:.4})",
            self.n_paths, self.n_steps, self.horizon
        )?;
        writeln!(out, "  seed           {}", self.seed)?;
        writeln!(out, "  mean           {:.6}", self.mean)?;
        writeln!(out, "  median         {:.6}", self.median)?;
        writeln!(out, "  {:<14} {:.6}", low, self.low)?;
        writeln!(out, "  {:<14} {:.6}", high, self.high)?;
        writeln!(out, "  min            {:.6}", self.min)?;
        writeln!(out, "  max            {:.6}", self.max)?;
        writeln!(out, "  E[S_T]         {:.6}", self.expected_mean)?;
        writeln!(out, "  sd[S_T]        {:.6}", self.expected_std)?;
        Ok(())
    }
}

/// Writes `summary` in `format` (`table` or `json`).
pub fn render(summary: &TerminalSummary, format: &str, out: &mut dyn Write) -> Result<()> {
    match format {
        "table" => summary.write_table(out)?,
        "json" => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            writeln!(out)?;
        }
        other => return Err(CliError::unknown_format(other, "table, json")),
    }
    Ok(())
}

/// Run the simulate command
pub fn run(settings: &Settings, format: &str) -> Result<()> {
    info!("Starting simulation...");
    let (simulator, run) = super::simulate(settings)?;
    let mut terminal = run.paths.column(run.paths.n_steps());
    let summary =
        TerminalSummary::from_terminal(&mut terminal, simulator.process(), settings, run.seed);

    let mut out = super::open_output(None)?;
    render(&summary, format, &mut *out)?;
    out.flush()?;
    info!("Simulation complete");
    Ok(())
}

//! Paths command implementation
//!
//! Writes the first few simulated paths in long format, one
//! `(step, path, value)` record per line, for external charting.

use std::io::Write;
use std::path::Path;

use infra_config::Settings;
use pathsim_engine::export::{to_long_format, PathPoint};
use tracing::info;

use crate::{CliError, Result};

/// Writes `points` in `format` (`csv` or `json`).
pub fn render(points: &[PathPoint], format: &str, out: &mut dyn Write) -> Result<()> {
    match format {
        "csv" => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for point in points {
                writer.serialize(point)?;
            }
            writer.flush()?;
        }
        "json" => {
            serde_json::to_writer_pretty(&mut *out, points)?;
            writeln!(out)?;
        }
        other => return Err(CliError::unknown_format(other, "csv, json")),
    }
    Ok(())
}

/// Run the paths command
pub fn run(settings: &Settings, n_plot: usize, format: &str, output: Option<&Path>) -> Result<()> {
    info!("Exporting up to {} paths...", n_plot);
    let (_, run) = super::simulate(settings)?;
    let points = to_long_format(&run.paths, n_plot);

    let mut out = super::open_output(output)?;
    render(&points, format, &mut *out)?;
    out.flush()?;
    info!("Exported {} records", points.len());
    Ok(())
}

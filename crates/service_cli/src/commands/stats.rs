//! Stats command implementation
//!
//! Runs one simulation and prints mean, median and the percentile band for
//! every time step.

use std::io::Write;

use infra_config::Settings;
use pathsim_engine::statistics::{PathStatistics, StatisticsSummary};
use tracing::info;

use crate::{CliError, Result};

/// Writes `summary` in `format` (`table`, `csv` or `json`).
///
/// `every` thins table rows to every k-th step; the last step is always
/// printed. The table adds the band width (`high - low`). CSV and JSON
/// always carry every step.
pub fn render(
    summary: &StatisticsSummary,
    format: &str,
    every: usize,
    out: &mut dyn Write,
) -> Result<()> {
    if every == 0 {
        return Err(CliError::InvalidArgument(
            "--every must be at least 1".to_string(),
        ));
    }
    let series = summary.series();

    match format {
        "table" => {
            write!(out, "{:>6}", "step")?;
            for (name, _) in &series {
                write!(out, " {:>14}", name)?;
            }
            writeln!(out, " {:>14}", "band")?;

            let band = summary.band_width();
            let last = summary.len().saturating_sub(1);
            let shown = (0..summary.len()).filter(|step| step % every == 0 || *step == last);
            for step in shown {
                write!(out, "{:>6}", step)?;
                for (_, values) in &series {
                    write!(out, " {:>14.6}", values[step])?;
                }
                writeln!(out, " {:>14.6}", band[step])?;
            }
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(
                std::iter::once("step").chain(series.iter().map(|(name, _)| name.as_str())),
            )?;
            for step in 0..summary.len() {
                writer.write_record(
                    std::iter::once(step.to_string())
                        .chain(series.iter().map(|(_, values)| values[step].to_string())),
                )?;
            }
            writer.flush()?;
        }
        "json" => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            writeln!(out)?;
        }
        other => return Err(CliError::unknown_format(other, "table, csv, json")),
    }
    Ok(())
}

/// Run the stats command
pub fn run(settings: &Settings, format: &str, every: usize) -> Result<()> {
    info!("Computing path statistics...");
    let (_, run) = super::simulate(settings)?;
    let summary = PathStatistics::new(&run.paths)?
        .compute_statistics(settings.statistics.p_low, settings.statistics.p_high)?;

    let mut out = super::open_output(None)?;
    render(&summary, format, every, &mut *out)?;
    out.flush()?;
    info!("Statistics complete ({} steps)", summary.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathsim_core::types::PathMatrix;

    fn summary() -> StatisticsSummary {
        let paths = PathMatrix::from_rows(&[
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![1.0, 4.0, 5.0, 6.0, 7.0],
        ])
        .unwrap();
        PathStatistics::new(&paths)
            .unwrap()
            .compute_statistics(5.0, 95.0)
            .unwrap()
    }

    fn render_to_string(format: &str, every: usize) -> String {
        let mut out = Vec::new();
        render(&summary(), format, every, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_thinning_keeps_last_step() {
        let table = render_to_string("table", 3);
        let steps: Vec<&str> = table
            .lines()
            .skip(1)
            .filter_map(|line| line.split_whitespace().next())
            .collect();
        assert_eq!(steps, vec!["0", "3", "4"]);
        assert!(table.lines().next().unwrap().contains("p95"));
    }

    #[test]
    fn test_csv_has_every_step() {
        let csv = render_to_string("csv", 3);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("step,mean,median,p5,p95"));
        assert_eq!(lines.next(), Some("0,1,1,1,1"));
        assert_eq!(lines.next(), Some("1,3,3,2.1,3.9"));
        assert_eq!(csv.lines().count(), 6);
    }

    #[test]
    fn test_table_shows_band_width() {
        let table = render_to_string("table", 1);
        let header: Vec<&str> = table.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(header, vec!["step", "mean", "median", "p5", "p95", "band"]);
        let step1: Vec<&str> = table.lines().nth(2).unwrap().split_whitespace().collect();
        assert_eq!(step1[0], "1");
        assert_eq!(step1[5], "1.800000");
    }

    #[test]
    fn test_equal_bounds_single_percentile_column() {
        let paths = PathMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let summary = PathStatistics::new(&paths)
            .unwrap()
            .compute_statistics(50.0, 50.0)
            .unwrap();
        let mut out = Vec::new();
        render(&summary, "csv", 1, &mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        assert_eq!(
            csv.lines().collect::<Vec<_>>(),
            vec!["step,mean,median,p50", "0,2,2,2", "1,3,3,3"]
        );
    }

    #[test]
    fn test_json_keys() {
        let json = render_to_string("json", 1);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(value["mean"].as_array().unwrap().len(), 5);
        assert_eq!(value["p5"][0], 1.0);
    }

    #[test]
    fn test_rejects_zero_every_and_unknown_format() {
        let mut out = Vec::new();
        assert!(render(&summary(), "table", 0, &mut out).is_err());
        assert!(matches!(
            render(&summary(), "parquet", 1, &mut out),
            Err(CliError::InvalidArgument(_))
        ));
    }
}

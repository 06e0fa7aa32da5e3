use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use gcquant::io::{read_matrix_csv_path, read_peak_list_path, write_report_csv, write_report_json};
use gcquant::peak::quantify_peaks;

use super::{Config, ReportFormat};

/// Quantify the peaks of a peak list
#[allow(clippy::too_many_arguments)]
pub fn run(
    matrix: PathBuf,
    peaks: PathBuf,
    output: Option<PathBuf>,
    format: ReportFormat,
    config_path: Option<PathBuf>,
    tolerance: Option<f64>,
    max_bound: Option<usize>,
    exclude_shared: bool,
) -> Result<()> {
    let start = Instant::now();

    let file_config = Config::load(config_path.as_deref())?;
    let mut config = file_config.integration();
    if let Some(tolerance) = tolerance {
        config.tolerance = tolerance;
    }
    if let Some(max_bound) = max_bound {
        config.max_bound = max_bound;
    }
    if exclude_shared {
        config.include_shared = false;
    }
    info!("Integration settings: {:?}", config);

    let im = read_matrix_csv_path(&matrix)
        .with_context(|| format!("Failed to read matrix: {}", matrix.display()))?;
    let peaks = read_peak_list_path(&peaks, &im)
        .with_context(|| format!("Failed to read peak list: {}", peaks.display()))?;

    let results = quantify_peaks(&im, &peaks, &config).context("Peak integration failed")?;

    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create report: {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    let written = match format {
        ReportFormat::Csv => write_report_csv(writer, &results),
        ReportFormat::Json => write_report_json(writer, &results),
    };
    written.context("Failed to write report")?;

    info!(
        "Quantified {} peaks in {:.2?}",
        results.len(),
        start.elapsed()
    );
    Ok(())
}

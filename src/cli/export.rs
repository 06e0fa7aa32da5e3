use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use gcquant::io::read_matrix_csv_path;

use super::Config;

/// Export one ion chromatogram (or the TIC) as text
pub fn run(
    matrix: PathBuf,
    output: PathBuf,
    mass: Option<f64>,
    minutes: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load(config_path.as_deref())?;
    let minutes = minutes || config.export.minutes.unwrap_or(false);

    let im = read_matrix_csv_path(&matrix)
        .with_context(|| format!("Failed to read matrix: {}", matrix.display()))?;
    let ic = im
        .ion_chromatogram_at_mass(mass)
        .context("Failed to extract ion chromatogram")?;
    ic.write(&output, minutes)
        .with_context(|| format!("Failed to write chromatogram: {}", output.display()))?;

    match ic.mass() {
        Some(mass) => info!("Wrote m/z {} chromatogram to {}", mass, output.display()),
        None => info!("Wrote TIC to {}", output.display()),
    }
    Ok(())
}

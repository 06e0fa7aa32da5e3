use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use gcquant::data::bin_run;
use gcquant::io::{read_scan_table_path, write_matrix_csv_path};

/// Bin a scan table into a unit-mass intensity matrix
pub fn run(scans: PathBuf, output: PathBuf) -> Result<()> {
    let start = Instant::now();
    info!("Reading scan table: {}", scans.display());

    let run = read_scan_table_path(&scans)
        .with_context(|| format!("Failed to read scan table: {}", scans.display()))?;
    let im = bin_run(&run).context("Failed to bin scans")?;
    write_matrix_csv_path(&output, &im)
        .with_context(|| format!("Failed to write matrix: {}", output.display()))?;

    let (nrows, ncols) = im.size();
    info!(
        "Binned {} scans into {} mass channels in {:.2?}",
        nrows,
        ncols,
        start.elapsed()
    );
    println!("Wrote {} x {} matrix to {}", nrows, ncols, output.display());

    Ok(())
}

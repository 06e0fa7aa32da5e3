use anyhow::{Context, Result};
use std::path::PathBuf;

use gcquant::io::read_matrix_csv_path;

/// Display information about an intensity matrix
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let im = read_matrix_csv_path(&file)
        .with_context(|| format!("Failed to read matrix: {}", file.display()))?;
    let (nrows, ncols) = im.size();
    let tic = im.tic();
    let (apex, tic_max) = tic
        .intensities()
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, &v)| {
            if v > best.1 {
                (i, v)
            } else {
                best
            }
        });

    println!("Intensity Matrix Information");
    println!("============================");
    println!("File: {}", file.display());
    println!();

    println!("Dimensions:");
    println!("  Scans: {}", nrows);
    println!("  Mass channels: {}", ncols);
    println!();

    println!("Ranges:");
    println!(
        "  Retention time: {:.3} - {:.3} s ({:.3} - {:.3} min)",
        im.min_rt(),
        im.max_rt(),
        im.min_rt() / 60.0,
        im.max_rt() / 60.0
    );
    println!("  Mass: {} - {}", im.min_mass(), im.max_mass());
    println!("  Mean time step: {:.4} s", tic.time_step());
    println!();

    println!("Total Ion Chromatogram:");
    println!("  Maximum: {:.6e} at {:.3} s", tic_max, im.times()[apex]);

    Ok(())
}

//! # gcquant
//!
//! Command-line front end for GC-MS intensity matrices and peak integration.
//!
//! ## Usage
//!
//! ```bash
//! # Bin a long-format scan table into a matrix
//! gcquant bin scans.csv matrix.csv
//!
//! # Integrate a peak list
//! gcquant quantify matrix.csv peaks.csv -o report.csv
//!
//! # Export the m/z 73 chromatogram in minutes
//! gcquant export-ic matrix.csv ic73.txt --mass 73 --minutes
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}

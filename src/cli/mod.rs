use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod bin;
mod export;
mod info;
mod quantify;

mod config;

pub use config::Config;

/// gcquant - GC-MS intensity matrices and peak integration
#[derive(Parser)]
#[command(name = "gcquant")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for quantification reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One CSV row per peak
    #[default]
    Csv,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Display dimensions and ranges of an intensity matrix
    Info {
        /// Matrix CSV file path
        #[arg(value_name = "MATRIX")]
        matrix: PathBuf,
    },

    /// Bin a long-format scan table into an intensity matrix
    Bin {
        /// Scan table CSV (time,mass,intensity)
        #[arg(value_name = "SCANS")]
        scans: PathBuf,

        /// Output matrix CSV file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Integrate every peak of a peak list against a matrix
    Quantify {
        /// Matrix CSV file path
        #[arg(value_name = "MATRIX")]
        matrix: PathBuf,

        /// Peak list CSV (rt[,left,apex,right])
        #[arg(value_name = "PEAKS")]
        peaks: PathBuf,

        /// Report file path (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short = 'f', long, default_value = "csv", value_enum)]
        format: ReportFormat,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Boundary tolerance in percent
        #[arg(short = 't', long)]
        tolerance: Option<f64>,

        /// Maximum points on each side of the apex (0 = unbounded)
        #[arg(short = 'b', long)]
        max_bound: Option<usize>,

        /// Leave shared boundaries out of the median width
        #[arg(long)]
        exclude_shared: bool,
    },

    /// Write one ion chromatogram as two-column text
    ExportIc {
        /// Matrix CSV file path
        #[arg(value_name = "MATRIX")]
        matrix: PathBuf,

        /// Output text file path
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Mass channel to export (TIC when omitted)
        #[arg(short, long)]
        mass: Option<f64>,

        /// Write times in minutes instead of seconds
        #[arg(long)]
        minutes: bool,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info { matrix } => info::run(matrix),
        Commands::Bin { scans, output } => bin::run(scans, output),
        Commands::Quantify {
            matrix,
            peaks,
            output,
            format,
            config,
            tolerance,
            max_bound,
            exclude_shared,
        } => quantify::run(
            matrix,
            peaks,
            output,
            format,
            config,
            tolerance,
            max_bound,
            exclude_shared,
        ),
        Commands::ExportIc {
            matrix,
            output,
            mass,
            minutes,
            config,
        } => export::run(matrix, output, mass, minutes, config),
    }
}

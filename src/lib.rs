//! # gcquant - GC-MS Intensity Matrices and Peak Integration
//!
//! `gcquant` holds a GC-MS run as a dense time × unit-mass intensity matrix and
//! integrates peaks in it channel by channel.
//!
//! ## Key Features
//!
//! - **Validated Data Model**: [`GcmsRun`](data::GcmsRun) and
//!   [`IntensityMatrix`](data::IntensityMatrix) check their invariants once at
//!   construction and are read-only afterwards.
//!
//! - **Unit-Mass Binning**: scans or flat instrument arrays are binned into
//!   integer mass columns with [`bin_run`](data::bin_run) and
//!   [`bin_flat_arrays`](data::bin_flat_arrays).
//!
//! - **Per-Ion Boundary Search**: [`ion_area`](peak::ion_area) grows each
//!   channel outward from the apex and flags boundaries cut short by a
//!   coeluting neighbour.
//!
//! - **Robust Peak Width**: [`median_bounds`](peak::median_bounds) takes the
//!   median boundary over all contributing channels.
//!
//! - **CSV and JSON I/O**: matrices, scan tables, peak lists and reports.
//!
//! ## Quick Start
//!
//! ```rust
//! use gcquant::data::IntensityMatrix;
//! use gcquant::peak::{median_bounds, peak_sum_area, Peak};
//!
//! let times = (0..7).map(f64::from).collect();
//! let masses = vec![73.0];
//! let rows = [0.0, 5.0, 10.0, 20.0, 10.0, 5.0, 0.0]
//!     .iter()
//!     .map(|&v| vec![v])
//!     .collect();
//! let im = IntensityMatrix::new(times, masses, rows)?;
//!
//! let peak = Peak::from_matrix(&im, 3.0)?;
//! assert_eq!(peak_sum_area(&im, &peak, 0)?, 50.0);
//! assert_eq!(median_bounds(&im, &peak, true)?, (3.0, 3.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Cargo Features
//!
//! - `parallel`: quantify the peaks of a batch on the rayon thread pool.

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod data;
pub mod io;
pub mod peak;

/// Convenient re-exports of the most used types
pub mod prelude {
    pub use crate::data::{
        bin_flat_arrays, bin_run, DataError, GcmsRun, IntensityMatrix, IonChromatogram,
        MassSpectrum, Scan,
    };
    pub use crate::io::{read_matrix_csv, read_peak_list, read_scan_table, IoError};
    pub use crate::peak::{
        ion_area, median_bounds, peak_sum_area, quantify_peaks, ApexSource, IntegrationConfig,
        Peak, PeakError, PeakQuantification,
    };
}

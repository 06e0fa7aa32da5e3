//! # GC-MS Data Model
//!
//! Containers for a GC-MS run and the binned intensity matrix derived from it.
//!
//! The flow through this module is:
//!
//! ```text
//! times + Scans ──► GcmsRun ──(binning)──► IntensityMatrix ──► IonChromatogram
//!                      │                        │
//!                      └──► TIC                 └──► MassSpectrum (one row)
//! ```
//!
//! Every container validates its input once at construction and is read-only
//! afterwards. Accessors hand out borrowed slices or small views; only
//! operations that build a new container (ion chromatograms, spectra) copy.

pub mod binning;
mod chromatogram;
mod error;
mod matrix;
mod run;
mod scan;
mod spectrum;

#[cfg(test)]
mod tests;

pub use binning::{bin_flat_arrays, bin_run};
pub use chromatogram::IonChromatogram;
pub use error::DataError;
pub use matrix::{ChannelView, IntensityMatrix};
pub use run::GcmsRun;
pub use scan::Scan;
pub use spectrum::MassSpectrum;

/// Reject NaN and infinite values.
pub(crate) fn check_finite(what: &'static str, values: &[f64]) -> Result<(), DataError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(DataError::NonFinite { what, index }),
        None => Ok(()),
    }
}

/// Reject lists that are not in non-decreasing order.
pub(crate) fn check_ascending(what: &'static str, values: &[f64]) -> Result<(), DataError> {
    if values.windows(2).any(|w| w[1] < w[0]) {
        return Err(DataError::Unsorted(what));
    }
    Ok(())
}

/// Smallest and largest value of a non-empty list.
pub(crate) fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

/// Index of the stored value closest to `query`.
///
/// Scans left to right and only replaces the current match on a strictly
/// smaller distance, so an exact tie resolves to the lower index.
pub(crate) fn nearest_index(values: &[f64], query: f64) -> usize {
    let mut best = f64::INFINITY;
    let mut index = 0;
    for (i, &v) in values.iter().enumerate() {
        let diff = (query - v).abs();
        if diff < best {
            best = diff;
            index = i;
        }
    }
    index
}

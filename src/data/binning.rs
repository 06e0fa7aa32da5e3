//! Unit-mass binning of raw scans into an [`IntensityMatrix`].
//!
//! Every measured mass is rounded to the nearest integer. The matrix gets one
//! column per integer between the rounded smallest and largest mass, and the
//! intensities that land in the same column of a scan are summed.

use log::{debug, warn};

use super::{check_ascending, check_finite, min_max, DataError, GcmsRun, IntensityMatrix};

/// Most unit-mass columns a binned matrix may have
pub const MAX_MASS_BINS: usize = 1 << 20;

/// Most cells a binned matrix may have
pub const MAX_MATRIX_CELLS: usize = 1 << 26;

const MAX_EXACT_MASS: f64 = 9.0e15;

/// Integer mass range covered by a set of measured masses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MassBins {
    first: i64,
    last: i64,
}

impl MassBins {
    fn spanning(min_mass: f64, max_mass: f64) -> Result<Self, DataError> {
        let too_wide = DataError::MassRangeTooWide {
            min: min_mass,
            max: max_mass,
            limit: MAX_MASS_BINS,
        };
        let (first, last) = (min_mass.round(), max_mass.round());
        // i64 casts saturate outside this range
        if !(first.abs() < MAX_EXACT_MASS && last.abs() < MAX_EXACT_MASS) {
            return Err(too_wide);
        }
        let bins = Self {
            first: first as i64,
            last: last as i64,
        };
        let width = bins
            .last
            .checked_sub(bins.first)
            .and_then(|span| span.checked_add(1))
            .and_then(|width| usize::try_from(width).ok());
        match width {
            Some(width) if width <= MAX_MASS_BINS => Ok(bins),
            _ => Err(too_wide),
        }
    }

    fn width(&self) -> usize {
        (self.last - self.first + 1) as usize
    }

    fn column(&self, mass: f64) -> Option<usize> {
        let bin = (mass.round() as i64).checked_sub(self.first)?;
        usize::try_from(bin).ok().filter(|&col| col < self.width())
    }

    fn cells(&self, rows: usize) -> Result<usize, DataError> {
        let cols = self.width();
        rows.checked_mul(cols)
            .filter(|&cells| cells <= MAX_MATRIX_CELLS)
            .ok_or(DataError::MatrixTooLarge {
                rows,
                cols,
                limit: MAX_MATRIX_CELLS,
            })
    }

    fn masses(&self) -> Vec<f64> {
        (self.first..=self.last).map(|m| m as f64).collect()
    }
}

/// Bin every scan of a run into unit-width mass columns
pub fn bin_run(run: &GcmsRun) -> Result<IntensityMatrix, DataError> {
    let bins = MassBins::spanning(run.min_mass(), run.max_mass())?;
    let width = bins.width();
    let mut values = vec![0.0; bins.cells(run.len())?];

    for (row, scan) in values.chunks_mut(width).zip(run.scans()) {
        for (mass, intensity) in scan.iter() {
            if let Some(col) = bins.column(mass) {
                row[col] += intensity;
            }
        }
    }

    debug!(
        "Binned {} scans into {} unit-mass columns ({}..{})",
        run.len(),
        width,
        bins.first,
        bins.last
    );
    IntensityMatrix::from_flat(run.times().to_vec(), bins.masses(), values)
}

/// Bin a run stored as flat arrays, the layout of ANDI/MS NetCDF files.
///
/// `masses` and `intensities` hold every point of every scan back to back. A
/// new scan starts whenever the rounded mass drops below the previous one.
/// When the number of scans found differs from the number of `times`, both
/// are truncated to the shorter count.
pub fn bin_flat_arrays(
    times: &[f64],
    masses: &[f64],
    intensities: &[f64],
) -> Result<IntensityMatrix, DataError> {
    if times.is_empty() {
        return Err(DataError::EmptyInput("scan acquisition times"));
    }
    if masses.is_empty() || intensities.is_empty() {
        return Err(DataError::EmptyInput("mass and intensity values"));
    }
    if masses.len() != intensities.len() {
        return Err(DataError::LengthMismatch {
            what: "intensity values",
            expected: masses.len(),
            actual: intensities.len(),
        });
    }
    check_finite("scan acquisition times", times)?;
    check_finite("mass values", masses)?;
    check_finite("intensity values", intensities)?;

    let (min_mass, max_mass) = min_max(masses);
    let bins = MassBins::spanning(min_mass, max_mass)?;
    let width = bins.width();

    let mut values = vec![0.0; width];
    let mut row_start = 0;
    let mut previous: Option<i64> = None;
    for (&mass, &intensity) in masses.iter().zip(intensities) {
        let rounded = mass.round() as i64;
        if previous.is_some_and(|p| p > rounded) {
            row_start += width;
            values.resize(bins.cells(row_start / width + 1)?, 0.0);
        }
        previous = Some(rounded);
        if let Some(col) = bins.column(mass) {
            values[row_start + col] += intensity;
        }
    }

    let scan_count = values.len() / width;
    let rows = scan_count.min(times.len());
    if scan_count != times.len() {
        warn!(
            "Found {} scans for {} acquisition times, truncating to {}",
            scan_count,
            times.len(),
            rows
        );
    }
    values.truncate(rows * width);
    let times = &times[..rows];
    check_ascending("scan acquisition times", times)?;

    debug!(
        "Binned {} flat points into {} scans x {} masses",
        masses.len(),
        rows,
        width
    );
    IntensityMatrix::from_flat(times.to_vec(), bins.masses(), values)
}

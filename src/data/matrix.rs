//! Dense time × mass intensity grid.

use std::sync::Arc;

use log::debug;

use super::{check_ascending, check_finite, min_max, nearest_index, DataError};
use super::{IonChromatogram, MassSpectrum};

/// Binned intensities of a GC-MS run.
///
/// Rows are scans (one per retention time), columns are mass bins. Values are
/// stored row-major in one flat buffer, so a scan is a contiguous slice and a
/// mass channel is a strided [`ChannelView`] over the same buffer.
///
/// The matrix keeps its own total ion chromatogram, summed over each row at
/// construction, so a TIC lookup does not need the run the matrix came from.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityMatrix {
    times: Arc<[f64]>,
    masses: Arc<[f64]>,
    values: Vec<f64>,
    min_rt: f64,
    max_rt: f64,
    min_mass: f64,
    max_mass: f64,
    tic: IonChromatogram,
}

impl IntensityMatrix {
    /// Create a matrix from one intensity row per retention time
    pub fn new(
        times: Vec<f64>,
        masses: Vec<f64>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, DataError> {
        if rows.len() != times.len() {
            return Err(DataError::LengthMismatch {
                what: "intensity matrix rows",
                expected: times.len(),
                actual: rows.len(),
            });
        }
        if let Some(bad) = rows.iter().find(|row| row.len() != masses.len()) {
            return Err(DataError::LengthMismatch {
                what: "intensity matrix row width",
                expected: masses.len(),
                actual: bad.len(),
            });
        }
        let values = rows.into_iter().flatten().collect();
        Self::from_flat(times, masses, values)
    }

    /// Create a matrix from a row-major flat buffer of `times.len() * masses.len()` values
    pub fn from_flat(
        times: Vec<f64>,
        masses: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self, DataError> {
        if times.is_empty() {
            return Err(DataError::EmptyInput("intensity matrix time list"));
        }
        if masses.is_empty() {
            return Err(DataError::EmptyInput("intensity matrix mass list"));
        }
        let expected = times.len() * masses.len();
        if values.len() != expected {
            return Err(DataError::LengthMismatch {
                what: "intensity matrix values",
                expected,
                actual: values.len(),
            });
        }
        check_finite("intensity matrix time list", &times)?;
        check_finite("intensity matrix mass list", &masses)?;
        check_finite("intensity matrix values", &values)?;
        check_ascending("intensity matrix time list", &times)?;
        check_ascending("intensity matrix mass list", &masses)?;

        let (min_rt, max_rt) = min_max(&times);
        let (min_mass, max_mass) = min_max(&masses);
        let times: Arc<[f64]> = times.into();
        let totals = values
            .chunks(masses.len())
            .map(|row| row.iter().sum())
            .collect();
        let tic = IonChromatogram::new(totals, times.clone(), None)?;

        debug!(
            "Built intensity matrix: {} scans x {} masses ({}..{})",
            times.len(),
            masses.len(),
            min_mass,
            max_mass
        );

        Ok(Self {
            times,
            masses: masses.into(),
            values,
            min_rt,
            max_rt,
            min_mass,
            max_mass,
            tic,
        })
    }

    /// `(rows, columns)`: number of scans and number of mass bins
    pub fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// Number of scans
    pub fn nrows(&self) -> usize {
        self.times.len()
    }

    /// Number of mass bins
    pub fn ncols(&self) -> usize {
        self.masses.len()
    }

    /// Retention times in seconds
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Bin masses
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// First retention time
    pub fn min_rt(&self) -> f64 {
        self.min_rt
    }

    /// Last retention time
    pub fn max_rt(&self) -> f64 {
        self.max_rt
    }

    /// Smallest bin mass
    pub fn min_mass(&self) -> f64 {
        self.min_mass
    }

    /// Largest bin mass
    pub fn max_mass(&self) -> f64 {
        self.max_mass
    }

    /// Raw row-major values
    pub fn as_flat(&self) -> &[f64] {
        &self.values
    }

    /// Bin mass of column `index`
    pub fn mass_at_index(&self, index: usize) -> Result<f64, DataError> {
        self.masses
            .get(index)
            .copied()
            .ok_or(DataError::IndexOutOfRange {
                what: "mass",
                index,
                len: self.masses.len(),
            })
    }

    /// Intensities of scan `index`, one per mass bin
    pub fn row(&self, index: usize) -> Result<&[f64], DataError> {
        if index >= self.nrows() {
            return Err(DataError::IndexOutOfRange {
                what: "scan",
                index,
                len: self.nrows(),
            });
        }
        let start = index * self.ncols();
        Ok(&self.values[start..start + self.ncols()])
    }

    /// Iterate over scans in time order
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks(self.ncols())
    }

    /// Borrowed view of mass channel `index` over all scans
    pub fn column(&self, index: usize) -> Result<ChannelView<'_>, DataError> {
        if index >= self.ncols() {
            return Err(DataError::IndexOutOfRange {
                what: "mass",
                index,
                len: self.ncols(),
            });
        }
        Ok(ChannelView {
            values: &self.values,
            stride: self.ncols(),
            offset: index,
            len: self.nrows(),
        })
    }

    /// Ion chromatogram of mass channel `index`
    pub fn ion_chromatogram_at_index(&self, index: usize) -> Result<IonChromatogram, DataError> {
        let channel = self.column(index)?;
        IonChromatogram::new(
            channel.to_vec(),
            self.times.clone(),
            Some(self.masses[index]),
        )
    }

    /// Ion chromatogram of the bin nearest to `mass`, or the TIC for `None`
    pub fn ion_chromatogram_at_mass(&self, mass: Option<f64>) -> Result<IonChromatogram, DataError> {
        match mass {
            None => Ok(self.tic.clone()),
            Some(mass) => {
                let index = self.nearest_mass_index(mass)?;
                self.ion_chromatogram_at_index(index)
            }
        }
    }

    /// Total ion chromatogram: row sums of the matrix
    pub fn tic(&self) -> &IonChromatogram {
        &self.tic
    }

    /// Binned spectrum of scan `index`
    pub fn mass_spectrum_at_index(&self, index: usize) -> Result<MassSpectrum, DataError> {
        let row = self.row(index)?;
        MassSpectrum::new(self.masses.to_vec(), row.to_vec())
    }

    /// Index of the scan nearest to `time`; ties go to the earlier scan
    pub fn nearest_time_index(&self, time: f64) -> Result<usize, DataError> {
        if !(self.min_rt..=self.max_rt).contains(&time) {
            return Err(DataError::TimeOutOfRange {
                time,
                min: self.min_rt,
                max: self.max_rt,
            });
        }
        Ok(nearest_index(&self.times, time))
    }

    /// Index of the bin nearest to `mass`; ties go to the lower bin
    pub fn nearest_mass_index(&self, mass: f64) -> Result<usize, DataError> {
        if !(self.min_mass..=self.max_mass).contains(&mass) {
            return Err(DataError::MassOutOfRange {
                mass,
                min: self.min_mass,
                max: self.max_mass,
            });
        }
        Ok(nearest_index(&self.masses, mass))
    }
}

/// Read-only strided view of one mass channel of an [`IntensityMatrix`].
#[derive(Debug, Clone, Copy)]
pub struct ChannelView<'a> {
    values: &'a [f64],
    stride: usize,
    offset: usize,
    len: usize,
}

impl<'a> ChannelView<'a> {
    /// Number of scans in the channel
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the channel has no scans
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Intensity at scan `index`
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.len {
            return None;
        }
        self.values.get(index * self.stride + self.offset).copied()
    }

    /// Iterate over the channel in time order
    pub fn iter(&self) -> impl Iterator<Item = f64> + 'a {
        self.values
            .iter()
            .skip(self.offset)
            .step_by(self.stride)
            .take(self.len)
            .copied()
    }

    /// Copy the channel into a vector
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}

use std::sync::Arc;

use log::debug;

use super::{check_ascending, check_finite, min_max, nearest_index, DataError};
use super::{IonChromatogram, Scan};

/// A raw GC-MS run: one [`Scan`] per retention time.
///
/// Retention times are in seconds and form the time axis of everything
/// derived from the run. The total ion chromatogram is computed once at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct GcmsRun {
    times: Arc<[f64]>,
    scans: Vec<Scan>,
    min_rt: f64,
    max_rt: f64,
    min_mass: f64,
    max_mass: f64,
    tic: IonChromatogram,
}

impl GcmsRun {
    /// Create a run from retention times and their scans
    pub fn new(times: Vec<f64>, scans: Vec<Scan>) -> Result<Self, DataError> {
        if times.is_empty() {
            return Err(DataError::EmptyInput("run time list"));
        }
        if scans.is_empty() {
            return Err(DataError::EmptyInput("run scan list"));
        }
        if times.len() != scans.len() {
            return Err(DataError::LengthMismatch {
                what: "run scan list",
                expected: times.len(),
                actual: scans.len(),
            });
        }
        check_finite("run time list", &times)?;
        check_ascending("run time list", &times)?;

        let (min_mass, max_mass) = scans.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), scan| (lo.min(scan.min_mass()), hi.max(scan.max_mass())),
        );

        let (min_rt, max_rt) = min_max(&times);
        let times: Arc<[f64]> = times.into();
        let totals = scans.iter().map(Scan::total_intensity).collect();
        let tic = IonChromatogram::new(totals, times.clone(), None)?;

        debug!(
            "Built GC-MS run: {} scans, rt {:.2}..{:.2} s, mass {}..{}",
            scans.len(),
            min_rt,
            max_rt,
            min_mass,
            max_mass
        );

        Ok(Self {
            times,
            scans,
            min_rt,
            max_rt,
            min_mass,
            max_mass,
            tic,
        })
    }

    /// Number of scans
    pub fn len(&self) -> usize {
        self.scans.len()
    }

    /// Always false; a run holds at least one scan
    pub fn is_empty(&self) -> bool {
        self.scans.is_empty()
    }

    /// Retention times in seconds
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Scans, parallel to [`GcmsRun::times`]
    pub fn scans(&self) -> &[Scan] {
        &self.scans
    }

    /// First retention time
    pub fn min_rt(&self) -> f64 {
        self.min_rt
    }

    /// Last retention time
    pub fn max_rt(&self) -> f64 {
        self.max_rt
    }

    /// Smallest mass over all scans
    pub fn min_mass(&self) -> f64 {
        self.min_mass
    }

    /// Largest mass over all scans
    pub fn max_mass(&self) -> f64 {
        self.max_mass
    }

    /// Total ion chromatogram: per-scan intensity sums
    pub fn tic(&self) -> &IonChromatogram {
        &self.tic
    }

    /// Index of the scan nearest to `time`; ties go to the earlier scan
    pub fn nearest_time_index(&self, time: f64) -> Result<usize, DataError> {
        let (min, max) = (self.min_rt, self.max_rt);
        if !(min..=max).contains(&time) {
            return Err(DataError::TimeOutOfRange { time, min, max });
        }
        Ok(nearest_index(&self.times, time))
    }
}

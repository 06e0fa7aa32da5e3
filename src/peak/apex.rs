//! What the integrator needs to know about a detected peak.

use serde::{Deserialize, Serialize};

use crate::data::{IntensityMatrix, MassSpectrum};

use super::PeakError;

/// Peak boundaries in scan-index space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointBounds {
    /// First scan of the peak
    pub left: usize,
    /// Apex scan
    pub apex: usize,
    /// Last scan of the peak
    pub right: usize,
}

impl PointBounds {
    /// Builds absolute bounds from an apex and offsets to either side.
    ///
    /// The left bound saturates at scan 0.
    pub fn from_offsets(apex: usize, left: usize, right: usize) -> Self {
        Self {
            left: apex.saturating_sub(left),
            apex,
            right: apex + right,
        }
    }

    /// Number of scans spanned, both ends included
    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left) + 1
    }
}

/// A detected peak as seen by the integrator.
///
/// Implement this for any peak type produced upstream; [`Peak`] is the
/// crate's own plain implementation.
pub trait ApexSource {
    /// Apex retention time in seconds
    fn rt(&self) -> f64;

    /// Binned spectrum at the apex, on the same mass axis as the matrix
    fn mass_spectrum(&self) -> &MassSpectrum;

    /// Bounds from an earlier integration, if any
    fn pt_bounds(&self) -> Option<PointBounds> {
        None
    }
}

/// A peak with an apex time, its apex spectrum and optional stored bounds
#[derive(Debug, Clone, PartialEq)]
pub struct Peak {
    rt: f64,
    spectrum: MassSpectrum,
    pt_bounds: Option<PointBounds>,
}

impl Peak {
    /// Create a peak from an apex time and spectrum
    pub fn new(rt: f64, spectrum: MassSpectrum) -> Self {
        Self {
            rt,
            spectrum,
            pt_bounds: None,
        }
    }

    /// Create a peak at `rt` whose spectrum is the nearest matrix row
    pub fn from_matrix(im: &IntensityMatrix, rt: f64) -> Result<Self, PeakError> {
        let index = im.nearest_time_index(rt)?;
        let spectrum = im.mass_spectrum_at_index(index)?;
        Ok(Self::new(rt, spectrum))
    }

    /// Attach stored bounds
    pub fn with_pt_bounds(mut self, bounds: PointBounds) -> Self {
        self.pt_bounds = Some(bounds);
        self
    }

    /// Replace the stored bounds
    pub fn set_pt_bounds(&mut self, bounds: Option<PointBounds>) {
        self.pt_bounds = bounds;
    }
}

impl ApexSource for Peak {
    fn rt(&self) -> f64 {
        self.rt
    }

    fn mass_spectrum(&self) -> &MassSpectrum {
        &self.spectrum
    }

    fn pt_bounds(&self) -> Option<PointBounds> {
        self.pt_bounds
    }
}

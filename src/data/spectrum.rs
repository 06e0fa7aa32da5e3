use super::{check_finite, DataError};

/// One scan's binned spectrum: bin masses and their summed intensities.
#[derive(Debug, Clone, PartialEq)]
pub struct MassSpectrum {
    masses: Vec<f64>,
    intensities: Vec<f64>,
}

impl MassSpectrum {
    /// Create a spectrum from parallel mass and intensity lists
    pub fn new(masses: Vec<f64>, intensities: Vec<f64>) -> Result<Self, DataError> {
        if masses.is_empty() {
            return Err(DataError::EmptyInput("mass spectrum mass list"));
        }
        if masses.len() != intensities.len() {
            return Err(DataError::LengthMismatch {
                what: "mass spectrum intensity list",
                expected: masses.len(),
                actual: intensities.len(),
            });
        }
        check_finite("mass spectrum mass list", &masses)?;
        check_finite("mass spectrum intensity list", &intensities)?;
        Ok(Self {
            masses,
            intensities,
        })
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// Always false; a spectrum holds at least one bin
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Bin masses
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Bin intensities
    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    /// Indices of the bins with strictly positive intensity.
    ///
    /// These are the mass channels that take part in peak integration.
    pub fn contributing_channels(&self) -> impl Iterator<Item = usize> + '_ {
        self.intensities
            .iter()
            .enumerate()
            .filter(|(_, &v)| v > 0.0)
            .map(|(i, _)| i)
    }
}

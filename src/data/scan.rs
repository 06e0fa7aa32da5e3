use super::{check_finite, min_max, DataError};

/// One instrument spectrum: masses and matching intensities at a single
/// retention time.
///
/// Masses are expected in ascending order but are not required to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    masses: Vec<f64>,
    intensities: Vec<f64>,
    min_mass: f64,
    max_mass: f64,
}

impl Scan {
    /// Create a scan from parallel mass and intensity lists
    pub fn new(masses: Vec<f64>, intensities: Vec<f64>) -> Result<Self, DataError> {
        if masses.is_empty() {
            return Err(DataError::EmptyInput("scan mass list"));
        }
        if masses.len() != intensities.len() {
            return Err(DataError::LengthMismatch {
                what: "scan intensity list",
                expected: masses.len(),
                actual: intensities.len(),
            });
        }
        check_finite("scan mass list", &masses)?;
        check_finite("scan intensity list", &intensities)?;

        let (min_mass, max_mass) = min_max(&masses);
        Ok(Self {
            masses,
            intensities,
            min_mass,
            max_mass,
        })
    }

    /// Number of mass/intensity pairs
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// Always false; a scan holds at least one point
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    /// Mass values
    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    /// Intensity values, parallel to [`Scan::masses`]
    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    /// Smallest mass in the scan
    pub fn min_mass(&self) -> f64 {
        self.min_mass
    }

    /// Largest mass in the scan
    pub fn max_mass(&self) -> f64 {
        self.max_mass
    }

    /// Sum of all intensities
    pub fn total_intensity(&self) -> f64 {
        self.intensities.iter().sum()
    }

    /// Iterate over `(mass, intensity)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.masses
            .iter()
            .copied()
            .zip(self.intensities.iter().copied())
    }
}

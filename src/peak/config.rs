//! Integration settings.

use serde::{Deserialize, Serialize};

use super::boundary::DEFAULT_TOLERANCE;
use super::PeakError;

/// Parameters shared by every peak in a quantification batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationConfig {
    /// Tolerance percentage for the boundary search
    pub tolerance: f64,

    /// Maximum points taken on each side of the apex (0 = unbounded)
    pub max_bound: usize,

    /// Count channels with shared boundaries when taking the median width
    pub include_shared: bool,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_bound: 0,
            include_shared: true,
        }
    }
}

impl IntegrationConfig {
    /// Check the tolerance is a usable percentage
    pub fn validate(&self) -> Result<(), PeakError> {
        if self.tolerance.is_finite() && self.tolerance >= 0.0 {
            Ok(())
        } else {
            Err(PeakError::InvalidTolerance(self.tolerance))
        }
    }
}

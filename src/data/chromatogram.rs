//! Ion chromatograms and their plain-text export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use super::{check_finite, DataError};

/// Intensity of one mass channel (or the total) as a function of retention time.
///
/// The time list is shared with the matrix or run it came from, so building
/// one chromatogram per channel only copies the intensities.
#[derive(Debug, Clone, PartialEq)]
pub struct IonChromatogram {
    intensities: Vec<f64>,
    times: Arc<[f64]>,
    mass: Option<f64>,
    time_step: f64,
}

impl IonChromatogram {
    /// Create a chromatogram. `mass` is `None` for a total ion chromatogram.
    pub fn new(
        intensities: Vec<f64>,
        times: impl Into<Arc<[f64]>>,
        mass: Option<f64>,
    ) -> Result<Self, DataError> {
        let times = times.into();
        if times.is_empty() {
            return Err(DataError::EmptyInput("chromatogram time list"));
        }
        if intensities.len() != times.len() {
            return Err(DataError::LengthMismatch {
                what: "chromatogram intensity array",
                expected: times.len(),
                actual: intensities.len(),
            });
        }
        check_finite("chromatogram time list", &times)?;
        check_finite("chromatogram intensity array", &intensities)?;

        let time_step = mean_time_step(&times);
        Ok(Self {
            intensities,
            times,
            mass,
            time_step,
        })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.intensities.len()
    }

    /// Always false; a chromatogram holds at least one sample
    pub fn is_empty(&self) -> bool {
        self.intensities.is_empty()
    }

    /// All intensities
    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    /// All retention times in seconds
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Intensity at sample `index`
    pub fn intensity_at(&self, index: usize) -> Result<f64, DataError> {
        self.intensities
            .get(index)
            .copied()
            .ok_or(DataError::IndexOutOfRange {
                what: "chromatogram",
                index,
                len: self.intensities.len(),
            })
    }

    /// Retention time at sample `index`
    pub fn time_at(&self, index: usize) -> Result<f64, DataError> {
        self.times
            .get(index)
            .copied()
            .ok_or(DataError::IndexOutOfRange {
                what: "chromatogram",
                index,
                len: self.times.len(),
            })
    }

    /// Mean spacing between consecutive retention times (0 for a single sample)
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Mass of the channel, `None` for a TIC
    pub fn mass(&self) -> Option<f64> {
        self.mass
    }

    /// True when this is a total ion chromatogram
    pub fn is_tic(&self) -> bool {
        self.mass.is_none()
    }

    /// Write one `time intensity` line per sample.
    ///
    /// Lines follow the C format `"%8.4f %#.6e"`. With `minutes` every time
    /// is divided by 60 first. No header is written.
    pub fn write_to<W: Write>(&self, mut writer: W, minutes: bool) -> std::io::Result<()> {
        let scale = if minutes { 60.0 } else { 1.0 };
        for (&time, &intensity) in self.times.iter().zip(self.intensities.iter()) {
            writeln!(
                writer,
                "{:8.4} {}",
                time / scale,
                format_scientific(intensity, 6)
            )?;
        }
        writer.flush()
    }

    /// Write the chromatogram to a file, see [`IonChromatogram::write_to`]
    pub fn write<P: AsRef<Path>>(&self, path: P, minutes: bool) -> std::io::Result<()> {
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file), minutes)
    }
}

fn mean_time_step(times: &[f64]) -> f64 {
    if times.len() < 2 {
        return 0.0;
    }
    let total: f64 = times.windows(2).map(|w| w[1] - w[0]).sum();
    total / (times.len() - 1) as f64
}

/// C-style `%.{precision}e`: signed exponent with at least two digits.
pub(crate) fn format_scientific(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let formatted = format!("{:.*e}", precision, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exponent.abs())
        }
        None => formatted,
    }
}

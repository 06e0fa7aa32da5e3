//! Peak lists: apex retention times with optional stored bounds.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;

use crate::data::IntensityMatrix;
use crate::peak::{Peak, PointBounds};

use super::IoError;

#[derive(Debug, Deserialize)]
struct PeakRecord {
    rt: f64,
    #[serde(default)]
    left: Option<usize>,
    #[serde(default)]
    apex: Option<usize>,
    #[serde(default)]
    right: Option<usize>,
}

impl PeakRecord {
    fn bounds(&self) -> Option<PointBounds> {
        match (self.left, self.apex, self.right) {
            (Some(left), Some(apex), Some(right)) => Some(PointBounds { left, apex, right }),
            (None, None, None) => None,
            _ => {
                warn!("ignoring incomplete bounds for peak at {:.3}s", self.rt);
                None
            }
        }
    }
}

/// Read peaks from a CSV with an `rt` column (seconds) and optional
/// `left`, `apex` and `right` scan indices.
///
/// Each peak takes its spectrum from the matrix row nearest its `rt`, so the
/// matrix must cover every listed time.
pub fn read_peak_list<R: Read>(reader: R, im: &IntensityMatrix) -> Result<Vec<Peak>, IoError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    if !csv_reader.headers()?.iter().any(|h| h == "rt") {
        return Err(IoError::MissingColumn("rt".to_string()));
    }

    let mut peaks = Vec::new();
    for record in csv_reader.deserialize() {
        let record: PeakRecord = record?;
        let mut peak = Peak::from_matrix(im, record.rt)?;
        peak.set_pt_bounds(record.bounds());
        peaks.push(peak);
    }

    debug!("Read {} peaks", peaks.len());
    Ok(peaks)
}

/// Read a peak list file
pub fn read_peak_list_path<P: AsRef<Path>>(
    path: P,
    im: &IntensityMatrix,
) -> Result<Vec<Peak>, IoError> {
    let file = File::open(path)?;
    read_peak_list(BufReader::new(file), im)
}

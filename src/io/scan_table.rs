//! Long-format scan tables: one `time,mass,intensity` row per data point.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::data::{GcmsRun, Scan};

use super::IoError;

#[derive(Debug, Deserialize)]
struct ScanRecord {
    time: f64,
    mass: f64,
    intensity: f64,
}

/// Read a scan table into a run.
///
/// Consecutive rows sharing a time form one scan. Times must ascend from one
/// scan to the next.
pub fn read_scan_table<R: Read>(reader: R) -> Result<GcmsRun, IoError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?;
    for column in ["time", "mass", "intensity"] {
        if !headers.iter().any(|h| h == column) {
            return Err(IoError::MissingColumn(column.to_string()));
        }
    }

    let mut times = Vec::new();
    let mut scans = Vec::new();
    let mut masses = Vec::new();
    let mut intensities = Vec::new();

    for record in csv_reader.deserialize() {
        let record: ScanRecord = record?;
        if times.last() != Some(&record.time) {
            if !masses.is_empty() {
                scans.push(Scan::new(
                    std::mem::take(&mut masses),
                    std::mem::take(&mut intensities),
                )?);
            }
            times.push(record.time);
        }
        masses.push(record.mass);
        intensities.push(record.intensity);
    }
    if !masses.is_empty() {
        scans.push(Scan::new(masses, intensities)?);
    }

    debug!("Read scan table with {} scans", scans.len());
    Ok(GcmsRun::new(times, scans)?)
}

/// Read a scan table file
pub fn read_scan_table_path<P: AsRef<Path>>(path: P) -> Result<GcmsRun, IoError> {
    let file = File::open(path)?;
    read_scan_table(BufReader::new(file))
}

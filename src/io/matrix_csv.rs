//! Dense intensity matrix as CSV: a `time` column followed by one column per mass.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::debug;

use crate::data::IntensityMatrix;

use super::IoError;

const TIME_COLUMN: &str = "time";

fn parse_field(field: &str, line: u64, column: &str) -> Result<f64, IoError> {
    field.parse::<f64>().map_err(|_| IoError::InvalidValue {
        line,
        column: column.to_string(),
        value: field.to_string(),
    })
}

/// Read a matrix whose header is `time,<mass>,<mass>,...`.
///
/// Every following record is one scan: its time in seconds and one intensity
/// per mass column.
pub fn read_matrix_csv<R: Read>(reader: R) -> Result<IntensityMatrix, IoError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    match headers.get(0) {
        Some(first) if first.eq_ignore_ascii_case(TIME_COLUMN) => {}
        _ => return Err(IoError::MissingColumn(TIME_COLUMN.to_string())),
    }
    let masses = headers
        .iter()
        .skip(1)
        .map(|field| parse_field(field, 1, "header"))
        .collect::<Result<Vec<_>, _>>()?;
    if masses.is_empty() {
        return Err(IoError::InvalidFormat(
            "matrix header has no mass columns".to_string(),
        ));
    }

    let mut times = Vec::new();
    let mut values = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        for (i, field) in record.iter().enumerate() {
            let column = headers.get(i).unwrap_or_default();
            let value = parse_field(field, line, column)?;
            if i == 0 {
                times.push(value);
            } else {
                values.push(value);
            }
        }
    }

    debug!(
        "Read matrix CSV with {} scans and {} mass columns",
        times.len(),
        masses.len()
    );
    Ok(IntensityMatrix::from_flat(times, masses, values)?)
}

/// Read a matrix CSV file
pub fn read_matrix_csv_path<P: AsRef<Path>>(path: P) -> Result<IntensityMatrix, IoError> {
    let file = File::open(path)?;
    read_matrix_csv(BufReader::new(file))
}

/// Write `im` in the layout read by [`read_matrix_csv`]
pub fn write_matrix_csv<W: Write>(writer: W, im: &IntensityMatrix) -> Result<(), IoError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(im.ncols() + 1);
    header.push(TIME_COLUMN.to_string());
    header.extend(im.masses().iter().map(f64::to_string));
    csv_writer.write_record(&header)?;

    for (time, row) in im.times().iter().zip(im.iter_rows()) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(time.to_string());
        record.extend(row.iter().map(f64::to_string));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write a matrix CSV file
pub fn write_matrix_csv_path<P: AsRef<Path>>(path: P, im: &IntensityMatrix) -> Result<(), IoError> {
    let file = File::create(path)?;
    write_matrix_csv(BufWriter::new(file), im)
}

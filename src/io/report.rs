//! Quantification reports.

use std::io::Write;

use crate::peak::PeakQuantification;

use super::IoError;

/// Write one CSV row per peak, with a header naming each field
pub fn write_report_csv<W: Write>(
    writer: W,
    results: &[PeakQuantification],
) -> Result<(), IoError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(result)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the results as a pretty-printed JSON array
pub fn write_report_json<W: Write>(
    mut writer: W,
    results: &[PeakQuantification],
) -> Result<(), IoError> {
    serde_json::to_writer_pretty(&mut writer, results)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

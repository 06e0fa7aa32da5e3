//! # Tables and Reports
//!
//! CSV readers and writers around the data model, plus report output for
//! quantified peaks.
//!
//! | Format       | Layout                                  | Entry points                                |
//! |--------------|-----------------------------------------|---------------------------------------------|
//! | Matrix CSV   | `time,<mass>,...` one row per scan      | [`read_matrix_csv`], [`write_matrix_csv`]   |
//! | Scan table   | `time,mass,intensity` one row per point | [`read_scan_table`]                         |
//! | Peak list    | `rt[,left,apex,right]`                  | [`read_peak_list`]                          |
//! | Report       | one record per peak, CSV or JSON        | [`write_report_csv`], [`write_report_json`] |
//!
//! Times are always seconds.

mod error;
mod matrix_csv;
mod peak_list;
mod report;
mod scan_table;


pub use error::IoError;
pub use matrix_csv::{read_matrix_csv, read_matrix_csv_path, write_matrix_csv, write_matrix_csv_path};
pub use peak_list::{read_peak_list, read_peak_list_path};
pub use report::{write_report_csv, write_report_json};
pub use scan_table::{read_scan_table, read_scan_table_path};

//! Workbook loading.
//!
//! Upload workbooks reach the validator as one CSV file per sheet; the
//! file stem names the sheet. Real spreadsheet parsing is a separate
//! concern handled upstream of this crate.

mod csv;

pub use csv::{load_workbook, parse_sheet};

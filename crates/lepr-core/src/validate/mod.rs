//! Rule batteries over the extracted chemistry data.
//!
//! Two independent sets: metadata rules run once per column of the
//! method/unit strip, value rules run once per cell of the matrix with
//! first-match-wins priority. [`validate_workbook`] wires them together.

mod metadata;
mod values;

use lepr_grid::Workbook;

use crate::error::Result;
use crate::extract::extract_chem_data;
use crate::findings::FindingLog;
use crate::layout::SheetLayout;

/// Run one full validation pass: extract the chemistry sub-table, apply
/// the metadata rules, then the value rules.
///
/// All findings are collected into the returned log; nothing aborts
/// early on bad data. A malformed workbook shape (missing sheet, layout
/// offsets outside the sheet) comes back as `Err` instead, since that is
/// a configuration problem rather than a data-quality finding.
pub fn validate_workbook(workbook: &Workbook, layout: &SheetLayout) -> Result<FindingLog> {
    let (matrix, strip) = extract_chem_data(workbook, layout)?;

    let mut log = FindingLog::new();
    metadata::check_metadata(&strip, layout, &mut log);
    values::check_values(&matrix, layout, &mut log);
    Ok(log)
}

//! Per-column metadata rules.
//!
//! All three rules run for every column; none of them short-circuits the
//! others. Column order follows the physical order of the strip so that
//! computed cell references line up with the sheet.

use crate::coords::{METHOD_ROW, Strip, UNIT_ROW, chem_cell_ref};
use crate::extract::MetadataStrip;
use crate::findings::FindingLog;
use crate::layout::SheetLayout;

/// Suffix pairing a measurement column with its error column.
const ERR_SUFFIX: &str = "_err";

pub(crate) fn check_metadata(strip: &MetadataStrip, layout: &SheetLayout, log: &mut FindingLog) {
    check_error_columns(strip, log);
    check_units(strip, layout, log);
    check_methods(strip, layout, log);
}

/// Every measurement column needs a paired `<name>_err` column. Reported
/// once per offending measurement column.
fn check_error_columns(strip: &MetadataStrip, log: &mut FindingLog) {
    for col in strip.species().iter().filter(|c| !c.ends_with(ERR_SUFFIX)) {
        if !strip.has_column(&format!("{col}{ERR_SUFFIX}")) {
            log.error(
                "missing_error_column",
                format!("'{col}{ERR_SUFFIX}' missing from chemistry data columns"),
            );
        }
    }
}

/// A blank unit cell invalidates every value in the column.
fn check_units(strip: &MetadataStrip, layout: &SheetLayout, log: &mut FindingLog) {
    for (col_ind, col) in strip.species().iter().enumerate() {
        if strip.unit(col_ind).is_empty() {
            let cell = chem_cell_ref(layout, Strip::Metadata, col_ind, UNIT_ROW);
            log.critical(
                "missing_units",
                format!("<<cell {cell}>>: '{col}' does not provide any units"),
            );
        }
    }
}

/// A blank method-id cell invalidates every value in the column.
fn check_methods(strip: &MetadataStrip, layout: &SheetLayout, log: &mut FindingLog) {
    for (col_ind, col) in strip.species().iter().enumerate() {
        if strip.method_id(col_ind).is_empty() {
            let cell = chem_cell_ref(layout, Strip::Metadata, col_ind, METHOD_ROW);
            log.critical(
                "missing_method",
                format!("<<cell {cell}>>: '{col}' does not provide any method id"),
            );
        }
    }
}

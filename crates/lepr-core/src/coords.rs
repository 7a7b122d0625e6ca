//! Mapping matrix positions back to sheet coordinates.
//!
//! The metadata strip and the value matrix live at different physical
//! rows of the upload sheet, so the row arithmetic differs per strip.
//! Both paths go through [`chem_cell_ref`] to keep them consistent: with
//! the default layout, method ids sit on sheet row 3, units on row 4, and
//! the first run row lands on row 7.

use lepr_grid::CellRef;

use crate::layout::SheetLayout;

/// Matrix row of the method-id cells within the metadata strip.
pub const METHOD_ROW: usize = 0;
/// Matrix row of the unit cells within the metadata strip.
pub const UNIT_ROW: usize = 1;

/// Which strip of the chemistry sub-table a position belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strip {
    /// The two-row method/unit strip under the species header.
    Metadata,
    /// The run × species value matrix.
    Values,
}

/// Spreadsheet-style reference ("N7") for a 0-based (col, row) position
/// within the given strip of the chemistry sub-table.
pub fn chem_cell_ref(layout: &SheetLayout, strip: Strip, col: usize, row: usize) -> String {
    let row_num = match strip {
        Strip::Metadata => layout.metadata_header_row + row + 1,
        Strip::Values => layout.header_row + layout.metadata_header_row + row + 1,
    };
    CellRef::new(layout.data_start_col + col, row_num - 1).to_string()
}

//! Spreadsheet data model.
//!
//! - [`CellValue`] - Raw cell content as read from an upload (empty, text, or number)
//! - [`Sheet`], [`Workbook`] - Dense row-major tables keyed by sheet name
//! - [`CellRef`] - Cell reference formatting (indices → A1 notation)

mod cell;
mod cell_ref;

pub use cell::{CellValue, Sheet, Workbook};
pub use cell_ref::CellRef;

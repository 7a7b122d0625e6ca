//! lepr-grid - spreadsheet primitives shared by the LEPR validation tools.

pub mod grid;

pub use grid::{CellRef, CellValue, Sheet, Workbook};

//! Error types for LEPR validation.
//!
//! These cover configuration-level failures (wrong sheet name, layout
//! offsets pointing outside the sheet, unreadable files). Data-quality
//! problems are never errors; they are reported as findings and the run
//! carries on.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeprError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Sheet '{0}' not found in workbook")]
    SheetNotFound(String),

    #[error(
        "data region starts at column {start_col} but sheet '{sheet}' only has {n_cols} columns"
    )]
    RegionOutOfBounds {
        sheet: String,
        start_col: usize,
        n_cols: usize,
    },

    #[error(
        "sheet '{sheet}' only has {n_rows} rows; the species header and metadata strip need 3"
    )]
    RegionTooShort { sheet: String, n_rows: usize },

    #[error("Layout config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LeprError>;

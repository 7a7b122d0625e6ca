//! Upload template layout.
//!
//! Describes where the chemistry sub-table lives inside the upload
//! workbook. All downstream coordinate math derives from these four
//! numbers, so a template revision only touches this record (or a TOML
//! override file next to the data).

use serde::Deserialize;
use std::path::Path;

use crate::error::{LeprError, Result};

pub const DEFAULT_SHEET_NAME: &str = "6 Run Products";

/// Where the chemistry data sits in the upload template.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetLayout {
    /// Sheet holding the run-products table.
    pub sheet_name: String,
    /// Sheet rows between the species header and the first run row
    /// (the two metadata rows plus any spacer rows).
    pub header_row: usize,
    /// Row offset of the metadata strip; method id and unit land on the
    /// two sheet rows following it.
    pub metadata_header_row: usize,
    /// 0-based column where the chemistry columns start.
    pub data_start_col: usize,
}

impl Default for SheetLayout {
    fn default() -> SheetLayout {
        SheetLayout {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            header_row: 4,
            metadata_header_row: 2,
            data_start_col: 13,
        }
    }
}

impl SheetLayout {
    /// Load a layout override from a TOML file. Absent keys keep their
    /// defaults.
    pub fn from_toml_file(path: &Path) -> Result<SheetLayout> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| LeprError::Config(format!("{}: {e}", path.display())))
    }
}

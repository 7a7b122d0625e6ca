//! Locating and decomposing the chemistry sub-table.
//!
//! The upload sheet is loosely structured: run ids live in column 0, the
//! chemistry columns start partway across the sheet, and the species
//! header carries a two-row method/unit strip beneath it followed by
//! spacer rows before the run data. Extraction slices that region apart
//! without interpreting any of it; blank labels and bogus values are
//! passed through verbatim for the validator to report.

use lepr_grid::{CellValue, Workbook};

use crate::error::{LeprError, Result};
use crate::layout::SheetLayout;

/// The run × species value matrix, column-major.
///
/// Row labels are run ids, column labels are chemical species names, both
/// in sheet order and taken verbatim (blanks included).
#[derive(Clone, Debug, PartialEq)]
pub struct ChemMatrix {
    species: Vec<String>,
    run_ids: Vec<String>,
    columns: Vec<Vec<CellValue>>,
}

impl ChemMatrix {
    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn run_ids(&self) -> &[String] {
        &self.run_ids
    }

    pub fn n_species(&self) -> usize {
        self.species.len()
    }

    pub fn n_runs(&self) -> usize {
        self.run_ids.len()
    }

    /// Cell at matrix position (col, row): `col` indexes species, `row`
    /// indexes runs.
    pub fn cell(&self, col: usize, row: usize) -> &CellValue {
        &self.columns[col][row]
    }
}

/// The two-row method/unit strip, aligned column-for-column with the
/// matrix. Row order is fixed: method id first, unit second.
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataStrip {
    species: Vec<String>,
    method_ids: Vec<CellValue>,
    units: Vec<CellValue>,
}

impl MetadataStrip {
    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn method_id(&self, col: usize) -> &CellValue {
        &self.method_ids[col]
    }

    pub fn unit(&self, col: usize) -> &CellValue {
        &self.units[col]
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.species.iter().any(|s| s == name)
    }
}

/// Slice the chemistry sub-table out of the upload workbook.
///
/// Returns the value matrix and its metadata strip. A missing sheet or a
/// sheet too narrow for the configured data region is a configuration
/// error, not a finding; the workbook itself is never mutated.
pub fn extract_chem_data(
    workbook: &Workbook,
    layout: &SheetLayout,
) -> Result<(ChemMatrix, MetadataStrip)> {
    let sheet = workbook
        .sheet(&layout.sheet_name)
        .ok_or_else(|| LeprError::SheetNotFound(layout.sheet_name.clone()))?;

    let n_cols = sheet.n_cols();
    if n_cols <= layout.data_start_col {
        return Err(LeprError::RegionOutOfBounds {
            sheet: layout.sheet_name.clone(),
            start_col: layout.data_start_col,
            n_cols,
        });
    }
    let n_species = n_cols - layout.data_start_col;

    // The species header and the two metadata rows must exist before any
    // run rows can.
    let n_rows = sheet.n_rows();
    if n_rows < 3 {
        return Err(LeprError::RegionTooShort {
            sheet: layout.sheet_name.clone(),
            n_rows,
        });
    }

    // Run ids and run data both start `header_row + 1` rows down: one row
    // for the species header, then the metadata strip and spacer rows.
    let first_run_row = layout.header_row + 1;

    let run_ids: Vec<String> = (first_run_row..n_rows)
        .map(|row| sheet.value(row, 0).label())
        .collect();

    let region_row = |row: usize| -> Vec<CellValue> {
        (0..n_species)
            .map(|c| sheet.value(row, layout.data_start_col + c).clone())
            .collect()
    };

    let species: Vec<String> = region_row(0).iter().map(CellValue::label).collect();
    let method_ids = region_row(1);
    let units = region_row(2);

    let columns: Vec<Vec<CellValue>> = (0..n_species)
        .map(|c| {
            (first_run_row..n_rows)
                .map(|row| sheet.value(row, layout.data_start_col + c).clone())
                .collect()
        })
        .collect();

    let matrix = ChemMatrix {
        species: species.clone(),
        run_ids,
        columns,
    };
    let strip = MetadataStrip {
        species,
        method_ids,
        units,
    };
    Ok((matrix, strip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::parse_sheet;
    use lepr_grid::Workbook;

    // Two species columns at the default layout: header row, method row,
    // unit row, two spacer rows, then the run rows.
    const SHEET: &str = "\
,,,,,,,,,,,,,Na,Na_err
,,,,,,,,,,,,,EMP,EMP
,,,,,,,,,,,,,wt%,wt%


run01,,,,,,,,,,,,,3.2,0.1
run02,,,,,,,,,,,,,nd,0.2
";

    fn workbook() -> Workbook {
        let mut wb = Workbook::new();
        wb.insert("6 Run Products", parse_sheet(SHEET));
        wb
    }

    #[test]
    fn matrix_shape_and_labels_match_the_sheet() {
        let (matrix, strip) = extract_chem_data(&workbook(), &SheetLayout::default()).unwrap();
        assert_eq!(matrix.species(), ["Na", "Na_err"]);
        assert_eq!(matrix.run_ids(), ["run01", "run02"]);
        assert_eq!(matrix.n_species(), 2);
        assert_eq!(matrix.n_runs(), 2);
        assert_eq!(strip.species(), ["Na", "Na_err"]);
    }

    #[test]
    fn matrix_cells_align_runs_with_values() {
        let (matrix, _) = extract_chem_data(&workbook(), &SheetLayout::default()).unwrap();
        assert_eq!(matrix.cell(0, 0), &CellValue::Number(3.2));
        assert_eq!(matrix.cell(0, 1), &CellValue::text("nd"));
        assert_eq!(matrix.cell(1, 1), &CellValue::Number(0.2));
    }

    #[test]
    fn metadata_strip_keeps_method_and_unit_rows_apart() {
        let (_, strip) = extract_chem_data(&workbook(), &SheetLayout::default()).unwrap();
        assert_eq!(strip.method_id(0), &CellValue::text("EMP"));
        assert_eq!(strip.unit(0), &CellValue::text("wt%"));
        assert!(strip.has_column("Na_err"));
        assert!(!strip.has_column("Mg_err"));
    }

    #[test]
    fn missing_sheet_is_a_configuration_error() {
        let layout = SheetLayout {
            sheet_name: "Nope".to_string(),
            ..SheetLayout::default()
        };
        match extract_chem_data(&workbook(), &layout) {
            Err(LeprError::SheetNotFound(name)) => assert_eq!(name, "Nope"),
            other => panic!("expected SheetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn short_sheet_is_a_configuration_error() {
        // Wide enough for the data region, but only the species header
        // row exists; the metadata rows must not be read out of bounds.
        let mut wb = Workbook::new();
        wb.insert(
            "6 Run Products",
            parse_sheet(&format!("{}Na\n", ",".repeat(13))),
        );
        match extract_chem_data(&wb, &SheetLayout::default()) {
            Err(LeprError::RegionTooShort { n_rows, .. }) => assert_eq!(n_rows, 1),
            other => panic!("expected RegionTooShort, got {other:?}"),
        }
    }

    #[test]
    fn narrow_sheet_is_a_configuration_error() {
        let mut wb = Workbook::new();
        wb.insert("6 Run Products", parse_sheet("a,b,c\n"));
        match extract_chem_data(&wb, &SheetLayout::default()) {
            Err(LeprError::RegionOutOfBounds { n_cols, .. }) => assert_eq!(n_cols, 3),
            other => panic!("expected RegionOutOfBounds, got {other:?}"),
        }
    }
}

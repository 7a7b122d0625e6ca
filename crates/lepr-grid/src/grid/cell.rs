//! Cell, sheet and workbook data structures.
//!
//! Uploads arrive as loosely structured tables of mixed-type cells, so the
//! model deliberately stays close to what a spreadsheet reader hands over:
//! every cell is [`CellValue::Empty`], [`CellValue::Text`] or
//! [`CellValue::Number`], and a [`Sheet`] is a dense row-major table that
//! tolerates ragged rows (short rows read as trailing empties).

/// Raw content of one spreadsheet cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Textual content, if this cell holds text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Render the cell for use as a row or column label.
    ///
    /// Labels are taken verbatim from the sheet; an empty cell yields an
    /// empty label rather than an error, leaving the defect for validation
    /// to report. Integral numbers drop the fractional part so a run id
    /// typed as `12` does not come back as `12.0`.
    pub fn label(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e10 => format!("{n:.0}"),
            CellValue::Number(n) => n.to_string(),
        }
    }
}

/// One sheet: a dense row-major table of cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sheet {
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Sheet {
        Sheet { rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Width of the sheet: the widest row wins, shorter rows are padded
    /// with empties on access.
    pub fn n_cols(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell at (row, col); positions beyond a row's end read as empty.
    /// Panics if `row` is outside the sheet.
    pub fn value(&self, row: usize, col: usize) -> &CellValue {
        self.rows[row].get(col).unwrap_or(&CellValue::Empty)
    }
}

/// A workbook: named sheets in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workbook {
    sheets: Vec<(String, Sheet)>,
}

impl Workbook {
    pub fn new() -> Workbook {
        Workbook::default()
    }

    /// Add a sheet, replacing any existing sheet with the same name.
    pub fn insert(&mut self, name: &str, sheet: Sheet) {
        if let Some(slot) = self.sheets.iter_mut().find(|(n, _)| n == name) {
            slot.1 = sheet;
        } else {
            self.sheets.push((name.to_string(), sheet));
        }
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, sheet)| sheet)
    }

    pub fn n_sheets(&self) -> usize {
        self.sheets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_renders_integral_numbers_without_fraction() {
        assert_eq!(CellValue::Number(12.0).label(), "12");
        assert_eq!(CellValue::Number(0.5).label(), "0.5");
        assert_eq!(CellValue::text("run01").label(), "run01");
        assert_eq!(CellValue::Empty.label(), "");
    }

    #[test]
    fn ragged_rows_read_as_trailing_empties() {
        let sheet = Sheet::new(vec![
            vec![CellValue::text("a"), CellValue::Number(1.0)],
            vec![CellValue::text("b")],
        ]);
        assert_eq!(sheet.n_cols(), 2);
        assert!(sheet.value(1, 1).is_empty());
    }

    #[test]
    fn workbook_insert_replaces_same_name() {
        let mut wb = Workbook::new();
        wb.insert("runs", Sheet::new(vec![vec![CellValue::text("x")]]));
        wb.insert("runs", Sheet::new(vec![vec![CellValue::text("y")]]));
        assert_eq!(wb.n_sheets(), 1);
        assert_eq!(wb.sheet("runs").unwrap().value(0, 0), &CellValue::text("y"));
    }
}

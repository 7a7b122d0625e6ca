//! CSV import for upload workbooks.

use std::path::Path;

use lepr_grid::{CellValue, Sheet, Workbook};

use crate::error::Result;

/// Load a workbook from a directory of `<sheet name>.csv` files.
///
/// Files are read in name order so sheet order is deterministic. Files
/// without a `.csv` extension are ignored.
pub fn load_workbook(dir: &Path) -> Result<Workbook> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();

    let mut workbook = Workbook::new();
    for path in paths {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let content = std::fs::read_to_string(&path)?;
        workbook.insert(stem, parse_sheet(&content));
    }
    Ok(workbook)
}

/// Parse CSV content into a sheet. Every line becomes a row; blank lines
/// become empty rows (they matter, since the upload layout counts spacer
/// rows).
pub fn parse_sheet(content: &str) -> Sheet {
    let rows = content
        .lines()
        .map(|line| parse_csv_line(line).iter().map(|f| parse_field(f)).collect())
        .collect();
    Sheet::new(rows)
}

/// Split a single CSV line, handling quoted fields and escaped quotes.
/// Unquoted fields are trimmed; quoted fields keep their whitespace.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_was_quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => {
                    in_quotes = true;
                    field_was_quoted = true;
                }
                ',' => {
                    if field_was_quoted {
                        fields.push(current.clone());
                    } else {
                        fields.push(current.trim().to_string());
                    }
                    current = String::new();
                    field_was_quoted = false;
                }
                _ => current.push(c),
            }
        }
    }
    if field_was_quoted {
        fields.push(current);
    } else {
        fields.push(current.trim().to_string());
    }
    fields
}

/// Map a CSV field to a cell value.
///
/// - empty -> `Empty`
/// - parses as a float -> `Number`, unless it has leading zeros (run ids
///   like `007` must stay text)
/// - anything else -> `Text`, kept verbatim so sentinel tokens survive
fn parse_field(field: &str) -> CellValue {
    if field.is_empty() {
        return CellValue::Empty;
    }

    if field.starts_with('0')
        && field.len() > 1
        && !field.starts_with("0.")
        && field.chars().nth(1).is_some_and(|c| c.is_ascii_digit())
    {
        return CellValue::text(field);
    }

    match field.parse::<f64>() {
        Ok(n) => CellValue::Number(n),
        Err(_) => CellValue::text(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_map_to_tagged_cell_values() {
        assert_eq!(parse_field(""), CellValue::Empty);
        assert_eq!(parse_field("3.14"), CellValue::Number(3.14));
        assert_eq!(parse_field("-2"), CellValue::Number(-2.0));
        assert_eq!(parse_field("nd"), CellValue::text("nd"));
        assert_eq!(parse_field("-"), CellValue::text("-"));
        assert_eq!(parse_field(">5"), CellValue::text(">5"));
    }

    #[test]
    fn leading_zero_ids_stay_text() {
        assert_eq!(parse_field("007"), CellValue::text("007"));
        assert_eq!(parse_field("0.5"), CellValue::Number(0.5));
        assert_eq!(parse_field("0"), CellValue::Number(0.0));
    }

    #[test]
    fn quoted_fields_keep_commas_and_quotes() {
        let fields = parse_csv_line(r#"a,"b,c","say ""hi""",d"#);
        assert_eq!(fields, ["a", "b,c", "say \"hi\"", "d"]);
    }

    #[test]
    fn blank_lines_become_empty_rows() {
        let sheet = parse_sheet("a,b\n\nc\n");
        assert_eq!(sheet.n_rows(), 3);
        assert!(sheet.value(1, 0).is_empty());
        assert!(sheet.value(1, 1).is_empty());
    }
}

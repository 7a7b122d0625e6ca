//! Per-cell value rules.
//!
//! Cells are visited column by column, runs in order within each column.
//! Numeric and blank cells are valid as-is (a blank means "not
//! measured"). Textual cells run through an ordered rule chain; the
//! first rule that matches logs its finding and stops the chain for that
//! cell, so the fallback only fires for text that matched no sentinel.

use lepr_grid::CellValue;

use crate::coords::{Strip, chem_cell_ref};
use crate::extract::ChemMatrix;
use crate::findings::FindingLog;
use crate::layout::SheetLayout;

/// Where a textual cell sits, for building the finding message.
struct CellSite<'a> {
    cell: String,
    chem: &'a str,
    run_id: &'a str,
    val: &'a str,
}

/// One entry of the value rule chain: a predicate over the raw text plus
/// the message it produces.
struct ValueRule {
    name: &'static str,
    applies: fn(&str) -> bool,
    message: fn(&CellSite<'_>) -> String,
}

/// Priority order matters: the fallback accepts any text, so it must
/// stay last.
const VALUE_RULES: &[ValueRule] = &[
    ValueRule {
        name: "not_detected",
        applies: |val| val == "nd",
        message: |s| {
            format!(
                "<<cell {}>>: '{}', the '{}' value for exp_run '{}' is not valid. \
                 If not detected use vocabulary 'bdl'",
                s.cell, s.val, s.chem, s.run_id
            )
        },
    },
    ValueRule {
        name: "not_measured",
        applies: |val| val == "-",
        message: |s| {
            format!(
                "<<cell {}>>: '{}', the '{}' value for exp_run '{}' is not valid. \
                 If not measured leave entry blank",
                s.cell, s.val, s.chem, s.run_id
            )
        },
    },
    ValueRule {
        name: "measurement_limit",
        applies: |val| val.starts_with('>') || val.starts_with('<'),
        // TODO: point the hint at the limit-indicator column once the
        // upload template gains one; until then limits are rejected
        // outright.
        message: |s| {
            format!(
                "<<cell {}>>: '{}', the '{}' value for exp_run '{}' is not valid. \
                 Instead give just the value and indicate limit using field '????, Ask roger'",
                s.cell, s.val, s.chem, s.run_id
            )
        },
    },
    ValueRule {
        name: "non_numeric",
        applies: |_| true,
        message: |s| {
            format!(
                "<<cell {}>>: '{}' value for exp_run '{}' is invalid. \
                 '{}' is not a valid number.",
                s.cell, s.chem, s.run_id, s.val
            )
        },
    },
];

pub(crate) fn check_values(matrix: &ChemMatrix, layout: &SheetLayout, log: &mut FindingLog) {
    for (col_ind, chem) in matrix.species().iter().enumerate() {
        for (row_ind, run_id) in matrix.run_ids().iter().enumerate() {
            let CellValue::Text(val) = matrix.cell(col_ind, row_ind) else {
                continue;
            };
            let site = CellSite {
                cell: chem_cell_ref(layout, Strip::Values, col_ind, row_ind),
                chem,
                run_id,
                val,
            };
            if let Some(rule) = VALUE_RULES.iter().find(|rule| (rule.applies)(val)) {
                log.error(rule.name, (rule.message)(&site));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_chem_data;
    use lepr_grid::Workbook;

    fn matrix_with_values(values: &[&str]) -> ChemMatrix {
        let pad = ",".repeat(13);
        let mut sheet = format!("{pad}Na\n{pad}EMP\n{pad}wt%\n\n\n");
        for (i, val) in values.iter().enumerate() {
            sheet.push_str(&format!("run{:02}{pad}{val}\n", i + 1));
        }
        let mut wb = Workbook::new();
        wb.insert("6 Run Products", crate::storage::parse_sheet(&sheet));
        extract_chem_data(&wb, &SheetLayout::default()).unwrap().0
    }

    fn rules_fired(values: &[&str]) -> Vec<&'static str> {
        let matrix = matrix_with_values(values);
        let mut log = FindingLog::new();
        check_values(&matrix, &SheetLayout::default(), &mut log);
        log.findings().iter().map(|f| f.rule).collect()
    }

    #[test]
    fn each_sentinel_fires_exactly_its_own_rule() {
        assert_eq!(rules_fired(&["nd"]), ["not_detected"]);
        assert_eq!(rules_fired(&["-"]), ["not_measured"]);
        assert_eq!(rules_fired(&[">5"]), ["measurement_limit"]);
        assert_eq!(rules_fired(&["<0.1"]), ["measurement_limit"]);
        assert_eq!(rules_fired(&["abc"]), ["non_numeric"]);
    }

    #[test]
    fn numeric_and_blank_cells_are_valid() {
        assert!(rules_fired(&["3.14"]).is_empty());
        assert!(rules_fired(&[""]).is_empty());
    }

    #[test]
    fn one_finding_per_bad_cell_in_matrix_order() {
        let rules = rules_fired(&["nd", "7.5", "-", "abc"]);
        assert_eq!(rules, ["not_detected", "not_measured", "non_numeric"]);
    }

    #[test]
    fn messages_carry_cell_reference_run_and_species() {
        let matrix = matrix_with_values(&["1.0", "nd"]);
        let mut log = FindingLog::new();
        check_values(&matrix, &SheetLayout::default(), &mut log);

        assert_eq!(log.len(), 1);
        // Second run row: one past the first value row.
        assert_eq!(
            log.findings()[0].message,
            "<<cell N8>>: 'nd', the 'Na' value for exp_run 'run02' is not valid. \
             If not detected use vocabulary 'bdl'"
        );
    }

    #[test]
    fn limit_message_rejects_with_hint() {
        let matrix = matrix_with_values(&[">5"]);
        let mut log = FindingLog::new();
        check_values(&matrix, &SheetLayout::default(), &mut log);
        assert_eq!(
            log.findings()[0].message,
            "<<cell N7>>: '>5', the 'Na' value for exp_run 'run01' is not valid. \
             Instead give just the value and indicate limit using field '????, Ask roger'"
        );
    }

    #[test]
    fn fallback_message_names_the_invalid_number() {
        let matrix = matrix_with_values(&["abc"]);
        let mut log = FindingLog::new();
        check_values(&matrix, &SheetLayout::default(), &mut log);
        assert_eq!(
            log.findings()[0].message,
            "<<cell N7>>: 'Na' value for exp_run 'run01' is invalid. \
             'abc' is not a valid number."
        );
    }
}

use movetrack_core::missing_fields;
use movetrack_types::ImportRow;

use crate::presentation::view_models::{
    CheckReportViewModel, CommandResultViewModel, Guidance, RowProblem, StatusBadge,
};

/// Required-field report for a CSV; rows are numbered from 1, header excluded
pub fn present_check_report(
    file: String,
    rows: &[ImportRow],
) -> CommandResultViewModel<CheckReportViewModel> {
    let problems: Vec<RowProblem> = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let missing = missing_fields(&row.movement);
            if missing.is_empty() {
                return None;
            }
            Some(RowProblem {
                row: index + 1,
                license_plate: row.movement.license_plate.clone(),
                missing: missing.iter().map(|field| field.name().to_string()).collect(),
            })
        })
        .collect();

    let content = CheckReportViewModel {
        file,
        rows: rows.len(),
        problems,
    };

    if content.is_clean() {
        let badge = StatusBadge::success(format!("All {} rows complete", content.rows));
        return CommandResultViewModel::new(badge, content);
    }

    let badge = StatusBadge::warning(format!(
        "{} of {} rows have missing fields",
        content.problems.len(),
        content.rows
    ));
    CommandResultViewModel::new(badge, content).suggest(Guidance::note(
        "With validation = \"require-fields\" in the config, import rejects this file",
    ))
}

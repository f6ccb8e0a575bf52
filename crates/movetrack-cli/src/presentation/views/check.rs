use std::fmt;

use crate::presentation::view_models::CheckReportViewModel;

impl fmt::Display for CheckReportViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {} ({} rows)", self.file, self.rows)?;
        for problem in &self.problems {
            let plate = if problem.license_plate.is_empty() {
                "(no plate)"
            } else {
                problem.license_plate.as_str()
            };
            writeln!(
                f,
                "  Row {:<4} {:<12} missing: {}",
                problem.row,
                plate,
                problem.missing.join(", ")
            )?;
        }
        Ok(())
    }
}

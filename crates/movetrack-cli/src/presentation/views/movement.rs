use std::fmt;

use crate::presentation::formatters::render_table;
use crate::presentation::view_models::{IngestViewModel, MovementListViewModel};

impl fmt::Display for MovementListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.movements.is_empty() {
            return writeln!(f, "No movements recorded.");
        }
        render_table(f, &self.table.headers, &self.table.rows)
    }
}

impl fmt::Display for IngestViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for file in &self.files {
            writeln!(f, "Source: {}", file)?;
        }
        for record in &self.records {
            writeln!(
                f,
                "  {}  {}  {} -> {}  by {}",
                record.id,
                record.license_plate(),
                record.movement.source_stage,
                record.movement.target_stage,
                record.executed_by
            )?;
        }
        writeln!(f, "Total movements: {}", self.total)
    }
}

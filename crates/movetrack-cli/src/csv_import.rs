//! CSV front-end for bulk import.
//!
//! Headers use the record's camelCase names:
//! licensePlate,vin,contractNumber,sourceStage,targetStage,dateOfMovement,action,comment,executedBy
//!
//! Every column is optional at this layer; whether missing values are acceptable is decided by
//! the store's validation policy.

use anyhow::{Context, Result};
use csv::{ReaderBuilder, Trim};
use movetrack_types::{Action, ImportRow, RawMovement};
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    #[serde(alias = "license_plate")]
    license_plate: Option<String>,
    vin: Option<String>,
    #[serde(alias = "contract_number")]
    contract_number: Option<String>,
    #[serde(alias = "source_stage")]
    source_stage: Option<String>,
    #[serde(alias = "target_stage")]
    target_stage: Option<String>,
    #[serde(alias = "date_of_movement")]
    date_of_movement: Option<String>,
    action: Option<String>,
    comment: Option<String>,
    #[serde(alias = "executed_by")]
    executed_by: Option<String>,
}

impl From<CsvRow> for ImportRow {
    fn from(row: CsvRow) -> Self {
        ImportRow {
            movement: RawMovement {
                license_plate: row.license_plate.unwrap_or_default(),
                vin: row.vin.unwrap_or_default(),
                contract_number: row.contract_number.unwrap_or_default(),
                source_stage: row.source_stage.unwrap_or_default(),
                target_stage: row.target_stage.unwrap_or_default(),
                date_of_movement: row.date_of_movement.unwrap_or_default(),
                action: Action::from(row.action.unwrap_or_default()),
                comment: row.comment,
            },
            executed_by: row.executed_by,
        }
    }
}

/// Parse CSV rows from any reader
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<ImportRow>> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (index, record) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = record.with_context(|| format!("CSV row {}", index + 1))?;
        rows.push(ImportRow::from(row));
    }
    Ok(rows)
}

/// Parse a CSV file
pub fn read_file(path: &Path) -> Result<Vec<ImportRow>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open CSV {}", path.display()))?;
    let rows = read_rows(file).with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "csv parsed");
    Ok(rows)
}

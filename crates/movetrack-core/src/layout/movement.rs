use movetrack_types::MovementRecord;

/// One column of the movement list
#[derive(Clone, Copy)]
pub struct MovementColumn {
    pub label: &'static str,
    pub value: fn(&MovementRecord) -> String,
}

impl MovementColumn {
    pub fn render(&self, record: &MovementRecord) -> String {
        (self.value)(record)
    }
}

impl std::fmt::Debug for MovementColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovementColumn")
            .field("label", &self.label)
            .finish()
    }
}

fn date_of_movement(r: &MovementRecord) -> String {
    r.movement.date_of_movement.clone()
}

fn license_plate(r: &MovementRecord) -> String {
    r.movement.license_plate.clone()
}

fn vin(r: &MovementRecord) -> String {
    r.movement.vin.clone()
}

fn contract_number(r: &MovementRecord) -> String {
    r.movement.contract_number.clone()
}

fn source_stage(r: &MovementRecord) -> String {
    r.movement.source_stage.clone()
}

fn target_stage(r: &MovementRecord) -> String {
    r.movement.target_stage.clone()
}

fn action(r: &MovementRecord) -> String {
    r.movement.action.to_string()
}

fn comment(r: &MovementRecord) -> String {
    match r.movement.comment.as_deref() {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => "-".to_string(),
    }
}

fn executed_by(r: &MovementRecord) -> String {
    r.executed_by.clone()
}

fn execution_date(r: &MovementRecord) -> String {
    r.execution_date_iso()
}

/// Movement list columns, in display order
pub const MOVEMENT_COLUMNS: &[MovementColumn] = &[
    MovementColumn {
        label: "Date",
        value: date_of_movement,
    },
    MovementColumn {
        label: "License Plate",
        value: license_plate,
    },
    MovementColumn {
        label: "VIN",
        value: vin,
    },
    MovementColumn {
        label: "Contract",
        value: contract_number,
    },
    MovementColumn {
        label: "From",
        value: source_stage,
    },
    MovementColumn {
        label: "To",
        value: target_stage,
    },
    MovementColumn {
        label: "Action",
        value: action,
    },
    MovementColumn {
        label: "Comment",
        value: comment,
    },
    MovementColumn {
        label: "Executed By",
        value: executed_by,
    },
    MovementColumn {
        label: "Executed At",
        value: execution_date,
    },
];

/// A record rendered through [`MOVEMENT_COLUMNS`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementRow {
    pub id: String,
    pub cells: Vec<String>,
}

pub fn movement_rows<'a>(
    records: impl IntoIterator<Item = &'a MovementRecord>,
) -> Vec<MovementRow> {
    records
        .into_iter()
        .map(|record| MovementRow {
            id: record.id.to_string(),
            cells: MOVEMENT_COLUMNS
                .iter()
                .map(|column| column.render(record))
                .collect(),
        })
        .collect()
}

use movetrack_core::Snapshot;
use movetrack_core::layout::{MOVEMENT_COLUMNS, movement_rows};
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, IngestViewModel, MovementListViewModel, MovementTable,
    StatusBadge, StatusLevel,
};

pub fn present_movement_list(
    snapshot: &Snapshot,
    limit: Option<usize>,
) -> CommandResultViewModel<MovementListViewModel> {
    let total = snapshot.len();
    let shown = limit.unwrap_or(total).min(total);
    let records = &snapshot.records()[..shown];

    let table = MovementTable {
        headers: MOVEMENT_COLUMNS.iter().map(|column| column.label).collect(),
        rows: movement_rows(records)
            .into_iter()
            .map(|row| row.cells)
            .collect(),
    };

    let content = MovementListViewModel {
        total,
        movements: records.to_vec(),
        table,
    };

    if total == 0 {
        return CommandResultViewModel::new(StatusBadge::info("No movements"), content).suggest(
            Guidance::run(
                "Import movements from a CSV file",
                "movetrack import <file.csv>",
            ),
        );
    }

    let badge = if shown < total {
        StatusBadge::success(format!("Showing {} of {} movements", shown, total))
    } else {
        StatusBadge::counted(StatusLevel::Success, total, "movement")
    };
    CommandResultViewModel::new(badge, content)
}

pub fn present_add_result(
    snapshot: &Snapshot,
    saved_to: Option<&Path>,
) -> CommandResultViewModel<IngestViewModel> {
    let content = IngestViewModel {
        added: 1,
        total: snapshot.len(),
        files: Vec::new(),
        records: snapshot.first().cloned().into_iter().collect(),
    };

    let result = CommandResultViewModel::new(StatusBadge::success("Movement added"), content)
        .saved_to(saved_to);
    if saved_to.is_some() {
        return result;
    }
    result.suggest(Guidance::run(
        "Pass --snapshot to keep movements between runs",
        "movetrack --snapshot movements.json add ...",
    ))
}

/// `added` records sit at the front of the snapshot, since every batch is prepended
pub fn present_import_result(
    snapshot: &Snapshot,
    added: usize,
    files: Vec<String>,
    saved_to: Option<&Path>,
) -> CommandResultViewModel<IngestViewModel> {
    let content = IngestViewModel {
        added,
        total: snapshot.len(),
        files,
        records: snapshot.records()[..added.min(snapshot.len())].to_vec(),
    };

    let badge = match added {
        0 => StatusBadge::warning("No rows imported"),
        1 => StatusBadge::success("Imported 1 movement"),
        n => StatusBadge::success(format!("Imported {} movements", n)),
    };

    CommandResultViewModel::new(badge, content).saved_to(saved_to.filter(|_| added > 0))
}

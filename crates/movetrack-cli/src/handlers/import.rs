use anyhow::{Context, Result};
use movetrack_core::MovementStore;
use std::path::{Path, PathBuf};

use crate::csv_import;
use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;

/// Import each file as its own batch. Files are committed in argument order, so a rejected
/// file leaves the batches of earlier files in place.
pub fn handle(
    store: &mut MovementStore,
    files: &[PathBuf],
    saved_to: Option<&Path>,
    renderer: &impl Renderer,
) -> Result<()> {
    let mut added = 0;
    let mut names = Vec::with_capacity(files.len());

    for path in files {
        let rows = csv_import::read_file(path)?;
        let count = rows.len();
        store
            .add_many(rows)
            .with_context(|| format!("Import of {} rejected", path.display()))?;

        tracing::info!(file = %path.display(), rows = count, "batch imported");
        added += count;
        names.push(path.display().to_string());
    }

    let snapshot = store.snapshot();
    renderer.render(presenters::present_import_result(
        &snapshot, added, names, saved_to,
    ))
}

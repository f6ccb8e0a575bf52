use anyhow::Result;
use movetrack_core::MovementStore;
use movetrack_types::{Action, RawMovement};
use std::path::Path;

use crate::args::AddArgs;
use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;

impl From<AddArgs> for RawMovement {
    fn from(args: AddArgs) -> Self {
        RawMovement {
            license_plate: args.license_plate,
            vin: args.vin,
            contract_number: args.contract_number,
            source_stage: args.source_stage,
            target_stage: args.target_stage,
            date_of_movement: args.date_of_movement,
            action: Action::from(args.action),
            comment: args.comment,
        }
    }
}

pub fn handle(
    store: &mut MovementStore,
    args: AddArgs,
    actor: &str,
    saved_to: Option<&Path>,
    renderer: &impl Renderer,
) -> Result<()> {
    let snapshot = store.add_one(RawMovement::from(args), actor)?;
    tracing::info!(actor, total = snapshot.len(), "movement added");
    renderer.render(presenters::present_add_result(&snapshot, saved_to))
}

use anyhow::Result;
use movetrack_core::MovementStore;

use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;

pub fn handle(store: &MovementStore, limit: Option<usize>, renderer: &impl Renderer) -> Result<()> {
    let snapshot = store.snapshot();
    renderer.render(presenters::present_movement_list(&snapshot, limit))
}

use anyhow::{Context, Result};
use movetrack_core::layout::SupplierView;
use movetrack_types::{SupplierData, SupplierSlot};
use std::path::Path;

use crate::presentation::presenters;
use crate::presentation::renderers::Renderer;

/// Read supplier data; `.toml` files are TOML, everything else JSON.
///
/// A JSON `null` document means "no data" and yields `None`.
pub fn load_supplier_data(path: &Path) -> Result<Option<SupplierData>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read supplier data {}", path.display()))?;

    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let data = if is_toml {
        Some(
            toml::from_str::<SupplierData>(&content)
                .with_context(|| format!("Invalid supplier data {}", path.display()))?,
        )
    } else {
        SupplierData::from_json_str(&content)
            .with_context(|| format!("Invalid supplier data {}", path.display()))?
    };
    Ok(data)
}

pub fn handle(
    file: &Path,
    tab: Option<SupplierSlot>,
    all: bool,
    renderer: &impl Renderer,
) -> Result<()> {
    let data = load_supplier_data(file)?;
    let mut view = SupplierView::build(data.as_ref());

    if let Some(slot) = tab
        && !view.select(slot)
    {
        tracing::warn!(tab = %slot, "no data for requested supplier, keeping default tab");
    }

    renderer.render(presenters::present_supplier_view(
        file.display().to_string(),
        view,
        all,
    ))
}

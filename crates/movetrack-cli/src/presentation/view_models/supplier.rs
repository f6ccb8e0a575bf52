use movetrack_core::layout::SupplierView;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierViewModel {
    pub file: String,

    /// Render every tab instead of only the selected one
    #[serde(skip)]
    pub show_all: bool,

    pub view: SupplierView,
}

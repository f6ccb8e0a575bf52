use movetrack_core::layout::SupplierView;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, StatusLevel, SupplierViewModel,
};

pub fn present_supplier_view(
    file: String,
    view: SupplierView,
    show_all: bool,
) -> CommandResultViewModel<SupplierViewModel> {
    let tab_count = view.tabs().len();
    let content = SupplierViewModel {
        file,
        show_all,
        view,
    };

    if tab_count == 0 {
        return CommandResultViewModel::new(
            StatusBadge::info("No supplier data available"),
            content,
        );
    }

    let result = CommandResultViewModel::new(
        StatusBadge::counted(StatusLevel::Success, tab_count, "supplier"),
        content,
    );
    if tab_count == 1 || show_all {
        return result;
    }
    result.suggest(Guidance::run(
        "Show every supplier",
        "movetrack suppliers <file> --all",
    ))
}

pub mod check;
pub mod movement;
pub mod supplier;

pub use check::present_check_report;
pub use movement::{present_add_result, present_import_result, present_movement_list};
pub use supplier::present_supplier_view;

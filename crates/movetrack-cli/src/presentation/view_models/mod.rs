pub mod check;
pub mod common;
pub mod movement;
pub mod result;
pub mod supplier;

pub use check::{CheckReportViewModel, RowProblem};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use movement::{IngestViewModel, MovementListViewModel, MovementTable};
pub use result::CommandResultViewModel;
pub use supplier::SupplierViewModel;

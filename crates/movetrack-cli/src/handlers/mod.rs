pub mod add;
pub mod check;
pub mod import;
pub mod list;
pub mod suppliers;

pub mod text;

pub use text::{render_table, truncate};

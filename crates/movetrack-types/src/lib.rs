pub mod error;
pub mod movement;
pub mod supplier;

pub use error::{Error, Result};
pub use movement::*;
pub use supplier::*;

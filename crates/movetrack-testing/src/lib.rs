//! Testing infrastructure for movetrack integration tests.
//!
//! - `TestWorld`: isolated temp directory with its own config and snapshot file
//! - `fixtures`: sample movements, CSV files and supplier data
//! - `assertions`: checks over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

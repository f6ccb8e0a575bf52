// NOTE: movetrack CLI
//
// The CLI is a display collaborator of the movement store: it feeds the store through the two
// ingestion calls (form-style `add`, CSV `import`) and renders whatever snapshot comes back.
// The store itself never touches files. When `--snapshot` is given the CLI loads that file as
// the explicit initial list and writes the new snapshot back after a mutating command; without
// it every invocation starts from an empty list.

mod args;
mod commands;
pub mod config;
pub mod csv_import;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod snapshot_file;
pub mod types;

pub use args::{AddArgs, Cli, Commands};
pub use commands::run;

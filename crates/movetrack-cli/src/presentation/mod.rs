//! # Presentation Layer
//!
//! Output logic for the CLI, kept apart from the store:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//!  (Controller)     (Converter)      (Contract)        (View)       (Console/JSON)
//! ```
//!
//! * `view_models/` - serializable data contracts; the JSON output is exactly these structs.
//! * `presenters/`  - pure functions mapping snapshots and supplier views to view models.
//! * `views/`       - `fmt::Display` implementations for plain-text output.
//! * `renderers/`   - chooses JSON or text and writes to stdout.
//! * `formatters/`  - small shared text helpers.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};

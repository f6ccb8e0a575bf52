//! Movement record store for vehicle logistics.
//!
//! The store owns an ordered list of movement records (newest first), accepts single and bulk
//! additions, assigns identity and audit metadata through an [`Assigner`], and publishes every
//! new [`Snapshot`] to registered [`SnapshotListener`]s. Supplier data is display-only and is
//! turned into tabbed views by [`layout`].

pub mod error;
pub mod identity;
pub mod layout;
pub mod store;
pub mod validation;

pub use error::{Error, ListenerError, Result};
pub use identity::{
    Assigner, Clock, DEFAULT_IMPORT_ACTOR, FixedClock, IdSource, SequentialIdSource, SystemClock,
    TimestampIdSource, UuidIdSource,
};
pub use store::{MovementStore, Snapshot, SnapshotListener};
pub use validation::{RequiredField, ValidationPolicy, missing_fields};

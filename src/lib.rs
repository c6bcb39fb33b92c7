//! # display-tuner
//!
//! Enumerates attached display outputs and applies resolution and DPI
//! scaling changes to one of them or to all of them at once. The engine is
//! split into two parts: the inventory, which snapshots the current
//! topology, and the applier, which resolves a change request against that
//! snapshot and pushes it through a display backend.

pub mod apply;
pub mod backends;
pub mod error;
pub mod inventory;
pub mod request;
pub mod source;

pub use apply::{ApplyOutcome, ApplyResult};
pub use error::{Error, Result};
pub use request::{ChangeRequest, TargetSelector};
pub use source::DisplaySource;

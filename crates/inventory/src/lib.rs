//! Materials inventory with full-state undo/redo.
//!
//! This crate contains the domain rules (merge-on-insert, keyed update and
//! remove) and the versioned service that records every command as a
//! snapshot. No IO happens here.

pub mod config;
pub mod history;
pub mod material;
pub mod query;
pub mod repository;
pub mod service;

pub use config::{FailedCommandPolicy, ServiceConfig};
pub use history::SnapshotHistory;
pub use material::{ExpirationDate, Material, MaterialKey};
pub use query::{ExpiredFilter, ShortOrder};
pub use repository::{DEFAULT_CAPACITY, MaterialRepository};
pub use service::{MaterialCommand, MaterialService};

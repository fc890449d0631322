//! `stockroom-core`: storage and domain building blocks.
//!
//! This crate contains **pure** primitives (no IO): the owning container,
//! the error model and the traits the inventory domain is written against.

pub mod container;
pub mod entity;
pub mod error;
pub mod snapshot;
pub mod value_object;

pub use container::{Container, exchange_sort};
pub use entity::Entity;
pub use error::{DomainError, DomainResult, HistoryStep};
pub use snapshot::Snapshot;
pub use value_object::ValueObject;

//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Direction of a history move that could not be made.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HistoryStep {
    Undo,
    Redo,
}

impl core::fmt::Display for HistoryStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HistoryStep::Undo => f.write_str("undo"),
            HistoryStep::Redo => f.write_str("redo"),
        }
    }
}

/// Domain-level error.
///
/// Every variant is recoverable by the caller: a failed operation leaves the
/// container, repository or history in its last consistent state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Backing storage could not grow.
    #[error("allocation failed: {0}")]
    Allocation(String),

    /// A keyed lookup (update/remove) matched nothing.
    #[error("not found")]
    NotFound,

    /// Undo at the oldest snapshot, or redo at the newest.
    #[error("nothing to {0}")]
    NoHistory(HistoryStep),

    /// A required value was missing or malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A positional access fell outside `[0, len)`.
    #[error("index {index} out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },

    /// The operation would break a uniqueness invariant.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::OutOfBounds { index, len }
    }
}

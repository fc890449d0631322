//! Typed configuration for [`crate::MaterialService`].

use crate::repository::DEFAULT_CAPACITY;

/// What happens to the history entry of a command whose keyed lookup fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum FailedCommandPolicy {
    /// The snapshot is pushed before the mutation runs and stays in the
    /// history, unmutated, when the mutation fails. Undo depth therefore
    /// counts every issued command.
    #[default]
    KeepSnapshot,
    /// The mutation runs against a detached copy; only a successful command
    /// reaches the history.
    Discard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Capacity of the initial (empty) repository. Must be at least 1.
    pub initial_capacity: usize,
    pub failed_command_policy: FailedCommandPolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            failed_command_policy: FailedCommandPolicy::default(),
        }
    }
}

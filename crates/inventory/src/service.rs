//! Versioned service: commands, queries and undo/redo over repository snapshots.

use chrono::{Local, NaiveDate};

use stockroom_core::{DomainResult, Snapshot, exchange_sort};

use crate::config::{FailedCommandPolicy, ServiceConfig};
use crate::history::SnapshotHistory;
use crate::material::{Material, MaterialKey};
use crate::query::{ExpiredFilter, ShortOrder, name_keep_order};
use crate::repository::MaterialRepository;

/// A state-changing request against the current repository.
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialCommand {
    /// Insert, merging into an existing row with the same key.
    Add(Material),
    /// Replace the row identified by `key` wholesale.
    Update {
        key: MaterialKey,
        replacement: Material,
    },
    /// Delete the row identified by the key.
    Remove(MaterialKey),
}

impl MaterialCommand {
    pub fn command_type(&self) -> &'static str {
        match self {
            MaterialCommand::Add(_) => "material.add",
            MaterialCommand::Update { .. } => "material.update",
            MaterialCommand::Remove(_) => "material.remove",
        }
    }

    fn apply(self, repository: &mut MaterialRepository) -> DomainResult<()> {
        match self {
            MaterialCommand::Add(material) => repository.add(material),
            MaterialCommand::Update { key, replacement } => repository.update(&key, replacement),
            MaterialCommand::Remove(key) => repository.remove(&key),
        }
    }
}

/// Materials inventory with full-state undo/redo.
///
/// Every command works on a fresh deep copy of the current repository that
/// becomes the newest history entry; undo and redo move between entries.
/// Queries read the current entry and hand back owned copies.
#[derive(Debug)]
pub struct MaterialService {
    history: SnapshotHistory<MaterialRepository>,
    policy: FailedCommandPolicy,
}

impl MaterialService {
    pub fn new(config: ServiceConfig) -> DomainResult<Self> {
        Self::with_materials(config, Vec::new())
    }

    /// Start with `materials` already in the initial snapshot.
    ///
    /// Seeding is not a command: the history still has a single entry and
    /// there is nothing to undo.
    pub fn with_materials(
        config: ServiceConfig,
        materials: impl IntoIterator<Item = Material>,
    ) -> DomainResult<Self> {
        let mut initial = MaterialRepository::with_capacity(config.initial_capacity)?;
        for material in materials {
            initial.add(material)?;
        }

        Ok(Self {
            history: SnapshotHistory::new(initial)?,
            policy: config.failed_command_policy,
        })
    }

    /// Run a command as a new history entry.
    ///
    /// With [`FailedCommandPolicy::KeepSnapshot`] the entry is recorded
    /// before the mutation, so a command failing with `NotFound` or
    /// `Conflict` still leaves an (unchanged) entry behind.
    pub fn execute(&mut self, command: MaterialCommand) -> DomainResult<()> {
        let command_type = command.command_type();

        let result = match self.policy {
            FailedCommandPolicy::KeepSnapshot => self
                .history
                .checkpoint()
                .and_then(|repository| command.apply(repository)),
            FailedCommandPolicy::Discard => self.history.current().snapshot().and_then(|mut next| {
                command.apply(&mut next)?;
                self.history.commit(next)
            }),
        };

        match &result {
            Ok(()) => tracing::debug!(
                command_type,
                history_len = self.history.len(),
                current = self.history.current_index(),
                "command applied"
            ),
            Err(err) => tracing::warn!(
                command_type,
                error = %err,
                history_len = self.history.len(),
                "command rejected"
            ),
        }

        result
    }

    pub fn add(&mut self, material: Material) -> DomainResult<()> {
        self.execute(MaterialCommand::Add(material))
    }

    pub fn update(&mut self, key: &MaterialKey, replacement: Material) -> DomainResult<()> {
        self.execute(MaterialCommand::Update {
            key: key.clone(),
            replacement,
        })
    }

    pub fn remove(&mut self, key: &MaterialKey) -> DomainResult<()> {
        self.execute(MaterialCommand::Remove(key.clone()))
    }

    pub fn undo(&mut self) -> DomainResult<()> {
        self.history.undo()?;
        tracing::debug!(current = self.history.current_index(), "undo");
        Ok(())
    }

    pub fn redo(&mut self) -> DomainResult<()> {
        self.history.redo()?;
        tracing::debug!(current = self.history.current_index(), "redo");
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn current_index(&self) -> usize {
        self.history.current_index()
    }

    /// The active repository snapshot (read-only).
    pub fn repository(&self) -> &MaterialRepository {
        self.history.current()
    }

    pub fn get(&self, index: usize) -> Option<&Material> {
        self.repository().get(index)
    }

    pub fn list(&self) -> Vec<Material> {
        self.repository().iter().cloned().collect()
    }

    /// Past-due materials (as of the local calendar day) that also match `filter`.
    pub fn filtered_expired(&self, filter: &ExpiredFilter) -> Vec<Material> {
        self.filtered_expired_on(filter, Local::now().date_naive())
    }

    /// Materials expired before `today` that also match `filter`, in repository order.
    pub fn filtered_expired_on(&self, filter: &ExpiredFilter, today: NaiveDate) -> Vec<Material> {
        self.repository()
            .iter()
            .filter(|m| m.expiration().is_expired_on(today) && filter.matches(m))
            .cloned()
            .collect()
    }

    pub fn sorted_by_name_ascending(&self) -> Vec<Material> {
        let mut materials = self.list();
        exchange_sort(&mut materials, name_keep_order);
        materials
    }

    /// Materials from `supplier` with quantity below `threshold`, sorted by quantity.
    pub fn filtered_short(&self, order: ShortOrder, supplier: &str, threshold: f64) -> Vec<Material> {
        let mut materials: Vec<Material> = self
            .repository()
            .iter()
            .filter(|m| m.supplier() == supplier && m.quantity() < threshold)
            .cloned()
            .collect();
        exchange_sort(&mut materials, |a, b| order.keep_order(a, b));
        materials
    }
}

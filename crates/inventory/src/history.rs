//! Linear snapshot history with undo/redo.
//!
//! The history is a sequence of fully independent snapshots plus a cursor.
//! Recording a new state while the cursor is not at the end discards the
//! undone future first, so the history never branches. Undo and redo only
//! move the cursor; they never copy or drop snapshots.

use stockroom_core::{Container, DomainError, DomainResult, HistoryStep, Snapshot};

/// Snapshots kept before the history storage first grows.
const INITIAL_HISTORY_CAPACITY: usize = 2;

/// Ordered snapshots plus the index of the active one.
///
/// Invariant: at least one snapshot exists and `current < len`.
#[derive(Debug)]
pub struct SnapshotHistory<S> {
    snapshots: Container<S>,
    current: usize,
}

impl<S: Snapshot> SnapshotHistory<S> {
    /// Start a history whose only (and current) entry is `initial`.
    pub fn new(initial: S) -> DomainResult<Self> {
        let mut snapshots = Container::with_capacity(INITIAL_HISTORY_CAPACITY)?;
        snapshots.push(initial)?;
        Ok(Self {
            snapshots,
            current: 0,
        })
    }

    /// The active snapshot.
    pub fn current(&self) -> &S {
        match self.snapshots.get(self.current) {
            Some(snapshot) => snapshot,
            None => unreachable!(
                "history cursor {} past {} snapshots",
                self.current,
                self.snapshots.len()
            ),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true: a history always holds its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&S> {
        self.snapshots.get(index)
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.snapshots.len()
    }

    /// Copy the active snapshot, make the copy the newest entry and return it
    /// for in-place mutation.
    ///
    /// Any undone future is discarded. If copying fails nothing changes.
    pub fn checkpoint(&mut self) -> DomainResult<&mut S> {
        let copy = self.current().snapshot()?;
        self.commit(copy)?;

        let (index, len) = (self.current, self.snapshots.len());
        self.snapshots
            .get_mut(index)
            .ok_or(DomainError::OutOfBounds { index, len })
    }

    /// Append `next` as the newest entry and make it active.
    ///
    /// Any undone future is discarded.
    pub fn commit(&mut self, next: S) -> DomainResult<()> {
        self.discard_future();
        self.snapshots.push(next)?;
        self.current = self.snapshots.len() - 1;
        Ok(())
    }

    pub fn undo(&mut self) -> DomainResult<()> {
        if !self.can_undo() {
            return Err(DomainError::NoHistory(HistoryStep::Undo));
        }
        self.current -= 1;
        Ok(())
    }

    pub fn redo(&mut self) -> DomainResult<()> {
        if !self.can_redo() {
            return Err(DomainError::NoHistory(HistoryStep::Redo));
        }
        self.current += 1;
        Ok(())
    }

    fn discard_future(&mut self) {
        if self.can_redo() {
            let dropped = self.snapshots.len() - self.current - 1;
            self.snapshots.truncate(self.current + 1);
            tracing::debug!(dropped, at = self.current, "discarded redo branch");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Numbers = Container<i32>;

    fn numbers(values: &[i32]) -> Numbers {
        let mut c = Container::with_capacity(1).unwrap();
        for v in values {
            c.push(*v).unwrap();
        }
        c
    }

    fn record(history: &mut SnapshotHistory<Numbers>, value: i32) {
        history.checkpoint().unwrap().push(value).unwrap();
    }

    #[test]
    fn starts_with_a_single_current_snapshot() {
        let history = SnapshotHistory::new(numbers(&[])).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_index(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn boundaries_report_no_history_and_change_nothing() {
        let mut history = SnapshotHistory::new(numbers(&[1])).unwrap();

        assert_eq!(history.undo(), Err(DomainError::NoHistory(HistoryStep::Undo)));
        assert_eq!(history.redo(), Err(DomainError::NoHistory(HistoryStep::Redo)));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_index(), 0);
        assert_eq!(history.current().as_slice(), &[1]);
    }

    #[test]
    fn checkpoint_copies_and_advances() {
        let mut history = SnapshotHistory::new(numbers(&[])).unwrap();
        record(&mut history, 1);
        record(&mut history, 2);

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_index(), 2);
        assert_eq!(history.current().as_slice(), &[1, 2]);
        assert_eq!(history.get(0).unwrap().as_slice(), &[] as &[i32]);
        assert_eq!(history.get(1).unwrap().as_slice(), &[1]);
    }

    #[test]
    fn undo_and_redo_only_move_the_cursor() {
        let mut history = SnapshotHistory::new(numbers(&[])).unwrap();
        record(&mut history, 1);

        history.undo().unwrap();
        assert_eq!(history.current_index(), 0);
        assert!(history.current().is_empty());
        assert_eq!(history.len(), 2);

        history.redo().unwrap();
        assert_eq!(history.current_index(), 1);
        assert_eq!(history.current().as_slice(), &[1]);
        assert!(history.redo().is_err());
    }

    #[test]
    fn new_entry_after_undo_truncates_the_future() {
        let mut history = SnapshotHistory::new(numbers(&[])).unwrap();
        for v in 1..=4 {
            record(&mut history, v);
        }
        history.undo().unwrap();
        history.undo().unwrap();
        history.undo().unwrap();
        assert_eq!(history.current_index(), 1);

        record(&mut history, 9);
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_index(), 2);
        assert_eq!(history.current().as_slice(), &[1, 9]);
        assert_eq!(history.redo(), Err(DomainError::NoHistory(HistoryStep::Redo)));
    }

    #[test]
    fn commit_appends_a_prepared_snapshot() {
        let mut history = SnapshotHistory::new(numbers(&[])).unwrap();
        history.commit(numbers(&[5, 6])).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.current().as_slice(), &[5, 6]);
    }

    #[test]
    fn snapshots_do_not_share_storage() {
        let mut history = SnapshotHistory::new(numbers(&[1])).unwrap();
        let latest = history.checkpoint().unwrap();
        latest.replace(0, 100).unwrap();

        assert_eq!(history.get(0).unwrap().as_slice(), &[1]);
        assert_eq!(history.current().as_slice(), &[100]);
    }
}

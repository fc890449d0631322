//! Deep-copy capability used by snapshot histories.

use crate::container::Container;
use crate::error::DomainResult;

/// A value that can produce a fully independent copy of itself.
///
/// The copy must share no storage with the original: mutating either one
/// afterwards is never observable through the other. Copying may need to
/// allocate, so it is fallible.
pub trait Snapshot: Sized {
    fn snapshot(&self) -> DomainResult<Self>;
}

impl<T: Clone> Snapshot for Container<T> {
    fn snapshot(&self) -> DomainResult<Self> {
        self.try_clone()
    }
}

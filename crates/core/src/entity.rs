//! Entity trait: identity that survives changes to the other attributes.

use crate::value_object::ValueObject;

/// Entity marker + minimal interface.
///
/// Two entities with equal keys are the same logical record even when their
/// remaining attributes (a stock quantity, say) differ.
pub trait Entity {
    /// Identity key. Keys are value objects: equal attributes, same key.
    type Key: ValueObject + Eq + core::hash::Hash;

    /// Returns the identity key.
    fn key(&self) -> &Self::Key;

    /// True when both entities carry the same key.
    fn same_identity(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

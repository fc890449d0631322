//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own; two instances holding the
/// same attributes are interchangeable. They are never edited in place: to
/// "change" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Supplier(String);
///
/// impl ValueObject for Supplier {}
///
/// assert_eq!(Supplier("HomeGoods".into()), Supplier("HomeGoods".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

//! Filters and orderings used by the read-side queries.
//!
//! Orderings follow the exchange-sort contract from
//! [`stockroom_core::exchange_sort`]: they answer "may `a` stay ahead of `b`?",
//! and a `false` answer swaps the pair.

use crate::material::Material;

/// Extra condition for the expired-materials query.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpiredFilter {
    /// Name contains the given substring (case-sensitive; empty matches all).
    NameContains(String),
    /// Quantity strictly below the threshold.
    QuantityLessThan(f64),
}

impl ExpiredFilter {
    pub fn matches(&self, material: &Material) -> bool {
        match self {
            ExpiredFilter::NameContains(needle) => material.name().contains(needle.as_str()),
            ExpiredFilter::QuantityLessThan(threshold) => material.quantity() < *threshold,
        }
    }
}

/// Quantity ordering for the short-supply query.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShortOrder {
    Ascending,
    Descending,
}

impl ShortOrder {
    /// Strict comparison: equal quantities are swapped.
    pub fn keep_order(self, a: &Material, b: &Material) -> bool {
        match self {
            ShortOrder::Ascending => a.quantity() < b.quantity(),
            ShortOrder::Descending => a.quantity() > b.quantity(),
        }
    }
}

/// Byte-wise lexicographic, ascending.
pub fn name_keep_order(a: &Material, b: &Material) -> bool {
    a.name() <= b.name()
}

//! Growable, index-addressable container that exclusively owns its elements.
//!
//! `Container<T>` keeps an explicit logical capacity that starts at the value
//! supplied to [`Container::with_capacity`] and doubles whenever an append
//! finds it full. Every positional accessor is bounds-checked and reports
//! [`DomainError::OutOfBounds`] instead of panicking. Elements are dropped
//! when they are evicted (replace, remove, truncate) or when the container
//! itself is dropped.

use std::collections::TryReserveError;

use crate::error::{DomainError, DomainResult};

/// Owning, order-preserving sequence with capacity doubling.
#[derive(Debug)]
pub struct Container<T> {
    items: Vec<T>,
    capacity: usize,
}

fn reserve_failed(requested: usize, err: TryReserveError) -> DomainError {
    DomainError::allocation(format!("could not reserve {requested} slots: {err}"))
}

impl<T> Container<T> {
    /// Create an empty container able to hold `capacity` elements before growing.
    ///
    /// A capacity of zero is rejected: doubling would never make room.
    pub fn with_capacity(capacity: usize) -> DomainResult<Self> {
        if capacity == 0 {
            return Err(DomainError::invalid_input(
                "container capacity must be at least 1",
            ));
        }

        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|e| reserve_failed(capacity, e))?;

        Ok(Self { items, capacity })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity (the doubling schedule), not the allocator's.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Borrow the element at `index`, or `None` outside `[0, len)`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Append `element`, doubling capacity first when full.
    ///
    /// When growth fails the container is left exactly as it was and the
    /// element is dropped with the error.
    pub fn push(&mut self, element: T) -> DomainResult<()> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        self.items.push(element);
        Ok(())
    }

    /// Replace the element at `index`; the previous occupant is dropped.
    pub fn replace(&mut self, index: usize, element: T) -> DomainResult<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| DomainError::out_of_bounds(index, len))?;
        *slot = element;
        Ok(())
    }

    /// Drop the element at `index` and shift the tail left by one.
    pub fn remove(&mut self, index: usize) -> DomainResult<()> {
        self.check_index(index)?;
        self.items.remove(index);
        Ok(())
    }

    /// Exchange two slots. Nothing is dropped.
    pub fn swap(&mut self, i: usize, j: usize) -> DomainResult<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.items.swap(i, j);
        Ok(())
    }

    /// Drop every element at position `len` and beyond. Capacity is kept.
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Reorder in place with the pairwise exchange sort. See [`exchange_sort`].
    pub fn exchange_sort<F>(&mut self, keep_order: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        exchange_sort(&mut self.items, keep_order);
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Deep copy with the same logical capacity.
    pub fn try_clone(&self) -> DomainResult<Self>
    where
        T: Clone,
    {
        let mut items = Vec::new();
        items
            .try_reserve_exact(self.capacity)
            .map_err(|e| reserve_failed(self.capacity, e))?;
        items.extend(self.items.iter().cloned());

        Ok(Self {
            items,
            capacity: self.capacity,
        })
    }

    fn check_index(&self, index: usize) -> DomainResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(DomainError::out_of_bounds(index, self.items.len()))
        }
    }

    fn grow(&mut self) -> DomainResult<()> {
        let doubled = self
            .capacity
            .checked_mul(2)
            .ok_or_else(|| DomainError::allocation("capacity overflow"))?;
        let additional = doubled - self.items.len();
        self.items
            .try_reserve_exact(additional)
            .map_err(|e| reserve_failed(doubled, e))?;

        tracing::trace!(from = self.capacity, to = doubled, "container capacity doubled");
        self.capacity = doubled;
        Ok(())
    }
}

/// Two containers are equal when they hold equal elements in the same order.
impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Pairwise exchange sort driven by a "keep order" predicate.
///
/// For each `i` in `0..len-1` and each `j` in `i+1..len`, the slots are
/// swapped when `keep_order(&items[i], &items[j])` returns **false**. A
/// `true` result leaves the pair as it is. The predicate is always asked
/// about the element currently sitting in slot `i`, which changes as swaps
/// happen.
///
/// This is not a three-way comparator. With a predicate such as `a <= b` the
/// result is ascending; with anything non-transitive or inconsistent the
/// output is exactly what the loop above produces, and callers may rely on
/// that. O(n²) comparisons.
pub fn exchange_sort<T, F>(items: &mut [T], mut keep_order: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    for i in 0..len.saturating_sub(1) {
        for j in (i + 1)..len {
            if !keep_order(&items[i], &items[j]) {
                items.swap(i, j);
            }
        }
    }
}

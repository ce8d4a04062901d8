//! Growable array with a fixed doubling policy.
//!
//! Every array in a [`Chunk`](super::Chunk) grows through the same
//! [`grow_capacity`] schedule. Arrays that receive the same sequence of pushes
//! therefore always report the same capacity, which keeps the instruction and
//! line tables in lockstep.

use std::ops::Index;

/// Capacity of an array after its first growth.
pub const MIN_CAPACITY: usize = 8;

/// Returns the capacity an array grows to when `old` is exhausted.
#[inline]
pub const fn grow_capacity(old: usize) -> usize {
    if old < MIN_CAPACITY { MIN_CAPACITY } else { old * 2 }
}

/// An append-only dynamic array with amortized O(1) push.
#[derive(Debug, Clone)]
pub struct GrowableArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array. No storage is allocated until the first push.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    /// Appends `value`, growing the storage when it is full.
    pub fn push(&mut self, value: T) {
        if self.items.len() == self.capacity {
            let new_capacity = grow_capacity(self.capacity);
            self.items.reserve_exact(new_capacity - self.items.len());
            self.capacity = new_capacity;
        }
        self.items.push(value);
    }

    /// Releases the storage and resets the array to its empty state.
    pub fn free(&mut self) {
        self.items = Vec::new();
        self.capacity = 0;
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements the array can hold before growing.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the most recently pushed element.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the stored elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the stored elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

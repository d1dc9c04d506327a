//! Fixed-capacity FIFO list.
//!
//! `BoundedMoveLog` serves two roles: short-lived candidate buffers sized to a
//! piece's maximum move count, and the long-lived, evicting undo history of a
//! `GameEngine`. Accessors return `Option` instead of assuming a valid index.

use std::collections::vec_deque::{self, VecDeque};

use crate::game_state::chess_errors::ChessErrors;

/// A list that never holds more than `capacity` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedMoveLog<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedMoveLog<T> {
    /// Creates an empty log. A zero capacity yields a log that is always full.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Appends `item` at the end.
    ///
    /// # Errors
    /// `ChessErrors::MoveLogFull` if the log is at capacity; the log is left
    /// unchanged and the caller decides whether to evict first.
    pub fn push_last(&mut self, item: T) -> Result<(), ChessErrors> {
        if self.is_full() {
            return Err(ChessErrors::MoveLogFull(self.capacity));
        }
        self.entries.push_back(item);
        Ok(())
    }

    /// Appends `item`, dropping the oldest entry first when the log is full.
    ///
    /// Returns the evicted entry, if any. With zero capacity the item itself
    /// is handed back.
    pub fn push_evicting(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }
        let evicted = if self.is_full() {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(item);
        evicted
    }

    #[inline]
    pub fn pop_first(&mut self) -> Option<T> {
        self.entries.pop_front()
    }

    #[inline]
    pub fn pop_last(&mut self) -> Option<T> {
        self.entries.pop_back()
    }

    #[inline]
    pub fn peek_first(&self) -> Option<&T> {
        self.entries.front()
    }

    #[inline]
    pub fn peek_last(&self) -> Option<&T> {
        self.entries.back()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Removes every entry; the capacity is unchanged.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keeps only the entries for which `keep` returns true. `keep` may edit
    /// the entries it is given.
    pub fn retain_mut<F>(&mut self, keep: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        self.entries.retain_mut(keep);
    }

    /// Iterates from the oldest to the newest entry.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T> IntoIterator for BoundedMoveLog<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a BoundedMoveLog<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

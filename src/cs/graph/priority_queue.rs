//! Binary min-heap with addressable entries.
//!
//! Slots are numbered from 1: node `k` has children `2k` and `2k + 1` and
//! parent `k / 2`. Every entry carries a `usize` handle, and the queue keeps
//! a handle-to-slot index so a single entry's key can be changed in place
//! (decrease-key) without rebuilding the heap.
//!
//! Ordering comes from a caller-supplied comparator; the smallest entry
//! under it sits at slot 1. Between operations every parent compares
//! `<=` both of its children.

use std::cmp::Ordering;

/// Array-backed binary heap ordered by `compare`.
pub struct PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// `heap[k - 1]` holds slot `k`.
    heap: Vec<(usize, T)>,
    /// `slots[handle]` is the 1-based slot of that handle, if queued.
    slots: Vec<Option<usize>>,
    compare: C,
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: C) -> Self {
        Self {
            heap: Vec::new(),
            slots: Vec::new(),
            compare,
        }
    }

    /// Builds a queue from `(handle, item)` pairs in O(n) with [`heapify`](Self::heapify).
    ///
    /// # Panics
    /// - if a handle appears twice.
    pub fn from_entries<I>(entries: I, compare: C) -> Self
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut queue = Self::new(compare);
        for (handle, item) in entries {
            queue.place(handle, item);
        }
        queue.heapify();
        queue
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, handle: usize) -> bool {
        self.slot_of(handle).is_some()
    }

    /// The queued item for `handle`.
    pub fn get(&self, handle: usize) -> Option<&T> {
        self.slot_of(handle).map(|k| &self.heap[k - 1].1)
    }

    /// The minimum entry without removing it.
    pub fn peek(&self) -> Option<(usize, &T)> {
        self.heap.first().map(|(handle, item)| (*handle, item))
    }

    /// Inserts `item` under `handle`.
    ///
    /// # Panics
    /// - if `handle` is already queued.
    pub fn push(&mut self, handle: usize, item: T) {
        let k = self.place(handle, item);
        self.swim(k);
    }

    /// Removes and returns the minimum entry.
    pub fn pop(&mut self) -> Option<(usize, T)> {
        let n = self.heap.len();
        if n == 0 {
            return None;
        }
        self.swap(1, n);
        let (handle, item) = self.heap.pop()?;
        self.slots[handle] = None;
        if !self.heap.is_empty() {
            self.sink(1);
        }
        Some((handle, item))
    }

    /// Replaces the item for `handle` and restores heap order around it.
    /// Returns `false` if `handle` is not queued.
    pub fn update(&mut self, handle: usize, item: T) -> bool {
        let Some(k) = self.slot_of(handle) else {
            return false;
        };
        self.heap[k - 1].1 = item;
        self.swim(k);
        if let Some(k) = self.slot_of(handle) {
            self.sink(k);
        }
        true
    }

    /// Restores heap order over the whole array by sinking every internal node.
    pub fn heapify(&mut self) {
        for k in (1..=self.heap.len() / 2).rev() {
            self.sink(k);
        }
    }

    /// Appends without reordering; returns the new slot.
    fn place(&mut self, handle: usize, item: T) -> usize {
        assert!(!self.contains(handle), "handle {handle} is already queued");
        if handle >= self.slots.len() {
            self.slots.resize(handle + 1, None);
        }
        self.heap.push((handle, item));
        let k = self.heap.len();
        self.slots[handle] = Some(k);
        k
    }

    fn slot_of(&self, handle: usize) -> Option<usize> {
        self.slots.get(handle).copied().flatten()
    }

    /// Moves slot `k` down while a child is smaller.
    fn sink(&mut self, mut k: usize) {
        let n = self.heap.len();
        while 2 * k <= n {
            let mut j = 2 * k;
            if j < n && self.greater(j, j + 1) {
                j += 1;
            }
            if !self.greater(k, j) {
                break;
            }
            self.swap(k, j);
            k = j;
        }
    }

    /// Moves slot `k` up while its parent is larger.
    fn swim(&mut self, mut k: usize) {
        while k > 1 && self.greater(k / 2, k) {
            self.swap(k, k / 2);
            k /= 2;
        }
    }

    fn greater(&self, i: usize, j: usize) -> bool {
        (self.compare)(&self.heap[i - 1].1, &self.heap[j - 1].1) == Ordering::Greater
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i - 1, j - 1);
        let hi = self.heap[i - 1].0;
        let hj = self.heap[j - 1].0;
        self.slots[hi] = Some(i);
        self.slots[hj] = Some(j);
    }

    #[cfg(test)]
    fn is_heap_ordered(&self) -> bool {
        (2..=self.heap.len()).all(|k| !self.greater(k / 2, k))
    }
}

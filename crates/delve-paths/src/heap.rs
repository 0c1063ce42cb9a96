//! Indexed binary min-heap over arena-resident items.
//!
//! Unlike `std::collections::BinaryHeap`, items record the slot they occupy,
//! so an item whose key decreased can be moved into place in O(log n)
//! without searching for it and without leaving stale duplicates behind.

use std::marker::PhantomData;

/// An item that can live in a [`PriorityHeap`].
///
/// Items describe their own priority through [`heap_key`](Self::heap_key)
/// and carry a slot field the heap keeps up to date.
pub trait HeapItem {
    /// Ordering key. The heap extracts the *smallest* key first.
    type Key: Ord;

    /// Current ordering key.
    fn heap_key(&self) -> Self::Key;

    /// Slot last assigned by the heap.
    fn heap_index(&self) -> usize;

    /// Record the slot the heap moved this item to.
    fn set_heap_index(&mut self, index: usize);
}

/// A fixed-capacity indexed binary min-heap.
///
/// The heap stores item ids, which index into an arena slice of `T` passed
/// to every operation. The arena owns the items (and their keys); the heap
/// only owns the ordering.
///
/// Invariants between operations:
/// - no live entry has a smaller key than its parent;
/// - `items[slots[i]].heap_index() == i` for every live slot `i`.
#[derive(Debug, Clone)]
pub struct PriorityHeap<T> {
    slots: Vec<usize>,
    count: usize,
    _item: PhantomData<fn(&T)>,
}

impl<T: HeapItem> PriorityHeap<T> {
    /// Create an empty heap that can hold up to `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity],
            count: 0,
            _item: PhantomData,
        }
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the heap holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Maximum number of simultaneous entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Id of the best (smallest key) item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        (self.count > 0).then(|| self.slots[0])
    }

    /// Insert item `id`.
    ///
    /// # Panics
    ///
    /// Panics if the heap is full.
    pub fn insert(&mut self, id: usize, items: &mut [T]) {
        assert!(
            self.count < self.slots.len(),
            "priority heap overflow: capacity {}",
            self.slots.len()
        );
        let slot = self.count;
        self.slots[slot] = id;
        items[id].set_heap_index(slot);
        self.count += 1;
        self.sift_up(slot, items);
    }

    /// Remove and return the id of the item with the smallest key.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty; check [`is_empty`](Self::is_empty) first.
    pub fn extract_best(&mut self, items: &mut [T]) -> usize {
        assert!(self.count > 0, "extract_best called on an empty heap");
        let best = self.slots[0];
        self.count -= 1;
        if self.count > 0 {
            let last = self.slots[self.count];
            self.slots[0] = last;
            items[last].set_heap_index(0);
            self.sift_down(0, items);
        }
        best
    }

    /// Restore heap order after the key of item `id` *decreased*.
    ///
    /// Only sifts upward: calling this after a key increase leaves the heap
    /// out of order.
    pub fn reposition(&mut self, id: usize, items: &mut [T]) {
        debug_assert!(self.contains(id, items), "reposition of an item not in the heap");
        let slot = items[id].heap_index();
        self.sift_up(slot, items);
    }

    /// Whether item `id` currently occupies a live slot. O(1).
    #[inline]
    pub fn contains(&self, id: usize, items: &[T]) -> bool {
        let slot = items[id].heap_index();
        slot < self.count && self.slots[slot] == id
    }

    /// Drop every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Ids of the live entries in slot order.
    pub fn ids(&self) -> &[usize] {
        &self.slots[..self.count]
    }

    fn sift_up(&mut self, mut slot: usize, items: &mut [T]) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            let id = self.slots[slot];
            let parent_id = self.slots[parent];
            if items[id].heap_key() < items[parent_id].heap_key() {
                self.swap(slot, parent, items);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize, items: &mut [T]) {
        loop {
            let left = 2 * slot + 1;
            let right = left + 1;
            if left >= self.count {
                break;
            }
            // Left child wins ties.
            let mut child = left;
            if right < self.count
                && items[self.slots[right]].heap_key() < items[self.slots[left]].heap_key()
            {
                child = right;
            }
            if items[self.slots[child]].heap_key() < items[self.slots[slot]].heap_key() {
                self.swap(slot, child, items);
                slot = child;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize, items: &mut [T]) {
        self.slots.swap(a, b);
        items[self.slots[a]].set_heap_index(a);
        items[self.slots[b]].set_heap_index(b);
    }
}

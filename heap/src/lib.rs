//! An indexed binary min-heap.
//!
//! Unlike `std::collections::BinaryHeap`, `insert` returns a [`Handle`] that
//! stays valid for the lifetime of the element and can be used to decrease
//! its priority in place and re-sift it, which is what repeated relaxation
//! in a Dijkstra pass needs. The heap never looks at a handle's priority
//! directly; it calls back into a user-supplied comparator that reads
//! whatever the caller considers "priority" off the stored element itself,
//! so elements can carry their cost alongside their payload the way the
//! nodes in a shortest-path grid usually do.

use std::cmp::Ordering;

/// Opaque reference to a value previously inserted into a [`Heap`].
///
/// A handle is valid from the moment `insert` returns it until the element
/// is popped by `extract_min`, at which point the heap nulls out its slot
/// so that a second `get`/`decrease_key` on the same handle is a detectable
/// no-op rather than silently touching a different element.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Handle(usize);

/// Sentinel stored in `pos` for a slot that isn't currently in the heap.
const GONE: usize = usize::MAX;

/// Indexed binary min-heap parameterized by a comparator over `T`.
///
/// `insert`, `extract_min` and `decrease_key` are all `O(log n)`. The heap
/// is meant to be built fresh for a single pathfinding pass and thrown
/// away; there's deliberately no `remove(handle)` for an arbitrary
/// non-root element, since nothing in this crate's callers needs it.
pub struct Heap<T, F> {
    /// Element storage, indexed by handle. `None` once extracted.
    slots: Vec<Option<T>>,
    /// Handles in heap (tree) order.
    heap: Vec<usize>,
    /// handle id -> index into `heap`, or `GONE` if not currently present.
    pos: Vec<usize>,
    cmp: F,
}

impl<T, F: Fn(&T, &T) -> Ordering> Heap<T, F> {
    pub fn new(cmp: F) -> Self {
        Heap {
            slots: Vec::new(),
            heap: Vec::new(),
            pos: Vec::new(),
            cmp,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert a value and return a handle to it.
    pub fn insert(&mut self, value: T) -> Handle {
        let id = self.slots.len();
        self.slots.push(Some(value));
        self.pos.push(self.heap.len());
        self.heap.push(id);
        self.sift_up(self.heap.len() - 1);
        Handle(id)
    }

    /// Read the element behind a handle, if it's still in the heap.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.slots.get(handle.0).and_then(|s| s.as_ref())
    }

    /// Mutably read the element behind a handle, so its priority can be
    /// lowered in place before calling [`Heap::decrease_key`].
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.slots.get_mut(handle.0).and_then(|s| s.as_mut())
    }

    /// Re-establish the heap invariant for a handle whose priority has just
    /// been lowered through [`Heap::get_mut`].
    ///
    /// Panics (in debug builds) if the handle has already been extracted;
    /// the slot is nulled out on removal specifically so this is caught
    /// rather than corrupting an unrelated element.
    pub fn decrease_key(&mut self, handle: Handle) {
        let i = self.pos[handle.0];
        debug_assert!(i != GONE, "decrease_key on a handle no longer in the heap");
        self.sift_up(i);
    }

    /// Remove and return the minimum element, or `None` if the heap is
    /// empty.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }

        let top = self.heap[0];
        self.pos[top] = GONE;

        let last = self.heap.pop().unwrap();
        if !self.heap.is_empty() {
            self.heap[0] = last;
            self.pos[last] = 0;
            self.sift_down(0);
        }

        self.slots[top].take()
    }

    /// Consume the heap. Present for symmetry with the explicit
    /// init/insert/extract/destroy life cycle this type is modeled on;
    /// dropping the value does the same thing.
    pub fn destroy(self) {}

    fn order(&self, a: usize, b: usize) -> Ordering {
        let a = self.slots[a].as_ref().expect("heap: dangling slot id");
        let b = self.slots[b].as_ref().expect("heap: dangling slot id");
        (self.cmp)(a, b)
    }

    fn swap_heap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.pos[self.heap[i]] = i;
        self.pos[self.heap[j]] = j;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.order(self.heap[i], self.heap[parent]) == Ordering::Less {
                self.swap_heap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let (l, r) = (2 * i + 1, 2 * i + 2);
            let mut smallest = i;
            if l < self.heap.len()
                && self.order(self.heap[l], self.heap[smallest]) == Ordering::Less
            {
                smallest = l;
            }
            if r < self.heap.len()
                && self.order(self.heap[r], self.heap[smallest]) == Ordering::Less
            {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.swap_heap(i, smallest);
            i = smallest;
        }
    }
}

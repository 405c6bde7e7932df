//! Indexed binary min-heap with decrease-key.
//!
//! A classic array-backed binary heap over (priority, element) pairs,
//! augmented with an element-to-slot index. The index is what makes
//! Dijkstra's relaxation cheap: membership is O(1) and re-prioritizing a
//! live element is O(log n) instead of a linear scan.
//!
//! All stated preconditions are caller contracts. Violating one is a
//! programming error and panics; none of them is a recoverable runtime
//! condition.

use std::collections::HashMap;

/// One slot of the heap array.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    priority: f64,
    element: usize,
}

/// A binary min-heap over non-negative priorities with O(1) membership
/// tests and O(log n) priority changes.
///
/// Every mutation keeps two structures in lockstep: the heap array and the
/// location index mapping each element to its current array slot. All
/// swaps go through one helper so the two can never drift apart.
#[derive(Debug, Clone, Default)]
pub struct IndexedMinHeap {
    heap: Vec<HeapEntry>,
    /// element -> current slot in `heap`.
    location: HashMap<usize, usize>,
}

impl IndexedMinHeap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap sized for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            location: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts an element with the given priority.
    ///
    /// # Panics
    /// If `element` is already present, or `priority` is negative.
    pub fn push(&mut self, priority: f64, element: usize) {
        assert!(
            !self.contains(element),
            "element {element} is already in the heap"
        );
        assert!(
            priority >= 0.0,
            "priority must be non-negative, got {priority}"
        );
        self.heap.push(HeapEntry { priority, element });
        self.location.insert(element, self.heap.len() - 1);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the minimum-priority element.
    ///
    /// Ties between equal priorities are broken arbitrarily; callers must
    /// not rely on any particular order among them.
    ///
    /// # Panics
    /// If the heap is empty.
    pub fn pop(&mut self) -> usize {
        assert!(!self.heap.is_empty(), "pop on an empty heap");
        let last = self.heap.len() - 1;
        self.swap_entries(0, last);
        let element = self.heap[last].element;
        self.heap.truncate(last);
        self.location.remove(&element);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        element
    }

    /// Re-prioritizes a live element in place: sifts up when the priority
    /// drops, down when it rises. This is the decrease-key primitive that
    /// Dijkstra's relaxation relies on; O(log n).
    ///
    /// # Panics
    /// If `element` is absent, or `new_priority` is negative.
    pub fn change_priority(&mut self, element: usize, new_priority: f64) {
        assert!(
            self.contains(element),
            "element {element} is not in the heap"
        );
        assert!(
            new_priority >= 0.0,
            "priority must be non-negative, got {new_priority}"
        );
        let slot = self.location[&element];
        let old_priority = self.heap[slot].priority;
        self.heap[slot].priority = new_priority;
        if new_priority < old_priority {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    /// The minimum priority, without removing its entry.
    ///
    /// # Panics
    /// If the heap is empty.
    pub fn top_priority(&self) -> f64 {
        assert!(!self.heap.is_empty(), "top_priority on an empty heap");
        self.heap[0].priority
    }

    /// The minimum-priority element, without removing it.
    ///
    /// # Panics
    /// If the heap is empty.
    pub fn top_element(&self) -> usize {
        assert!(!self.heap.is_empty(), "top_element on an empty heap");
        self.heap[0].element
    }

    /// The priority of a live element.
    ///
    /// # Panics
    /// If `element` is absent.
    pub fn priority(&self, element: usize) -> f64 {
        assert!(
            self.contains(element),
            "element {element} is not in the heap"
        );
        self.heap[self.location[&element]].priority
    }

    /// O(1) membership test backed by the location index.
    pub fn contains(&self, element: usize) -> bool {
        self.location.contains_key(&element)
    }

    /// True when no elements are present.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of elements currently in the heap.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drops every element and resets the location index.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.location.clear();
    }

    /// Swaps two slots, re-pointing the location index at the true
    /// position of both affected elements. Every reordering move runs
    /// through here; nothing else touches the index mid-flight.
    fn swap_entries(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.location.insert(self.heap[i].element, i);
        self.location.insert(self.heap[j].element, j);
    }

    /// Moves the entry at `slot` up until its parent is no larger.
    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.heap[slot].priority >= self.heap[parent].priority {
                break;
            }
            self.swap_entries(slot, parent);
            slot = parent;
        }
    }

    /// Moves the entry at `slot` down until neither child is smaller.
    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;
            if left < self.heap.len() && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < self.heap.len() && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == slot {
                break;
            }
            self.swap_entries(slot, smallest);
            slot = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks the two structural invariants: heap order, and the location
    /// index pointing at every element's true slot.
    fn assert_invariants(heap: &IndexedMinHeap) {
        assert_eq!(heap.location.len(), heap.heap.len());
        for (slot, entry) in heap.heap.iter().enumerate() {
            assert_eq!(
                heap.location[&entry.element], slot,
                "location index out of sync for element {}",
                entry.element
            );
            if slot > 0 {
                let parent = (slot - 1) / 2;
                assert!(
                    heap.heap[parent].priority <= entry.priority,
                    "heap order violated between slots {parent} and {slot}"
                );
            }
        }
    }

    /// Builds a heap directly from (priority, element) slots, bypassing
    /// push, for white-box sift tests.
    fn heap_from_slots(entries: &[(f64, usize)]) -> IndexedMinHeap {
        let mut heap = IndexedMinHeap::new();
        for (slot, &(priority, element)) in entries.iter().enumerate() {
            heap.heap.push(HeapEntry { priority, element });
            heap.location.insert(element, slot);
        }
        assert_invariants(&heap);
        heap
    }

    fn drain_priorities(heap: &mut IndexedMinHeap) -> Vec<f64> {
        let mut priorities = Vec::new();
        while !heap.is_empty() {
            priorities.push(heap.top_priority());
            heap.pop();
        }
        priorities
    }

    #[test]
    fn test_pop_returns_elements_in_priority_order() {
        let mut heap = IndexedMinHeap::new();
        heap.push(5.0, 50);
        heap.push(1.0, 10);
        heap.push(4.0, 40);
        heap.push(2.0, 20);
        heap.push(3.0, 30);

        assert_eq!(heap.pop(), 10);
        assert_eq!(heap.pop(), 20);
        assert_eq!(heap.pop(), 30);
        assert_eq!(heap.pop(), 40);
        assert_eq!(heap.pop(), 50);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_equal_priorities_all_come_out() {
        let mut heap = IndexedMinHeap::new();
        heap.push(1.0, 0);
        heap.push(1.0, 1);
        heap.push(1.0, 2);

        // The tie order is unspecified; only the set is guaranteed.
        let mut popped = vec![heap.pop(), heap.pop(), heap.pop()];
        popped.sort_unstable();
        assert_eq!(popped, vec![0, 1, 2]);
    }

    #[test]
    fn test_top_accessors_do_not_remove() {
        let mut heap = IndexedMinHeap::new();
        heap.push(2.0, 7);
        heap.push(1.0, 3);

        assert_eq!(heap.top_element(), 3);
        assert_eq!(heap.top_priority(), 1.0);
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_change_priority_decrease_moves_element_to_top() {
        let mut heap = IndexedMinHeap::new();
        heap.push(10.0, 1);
        heap.push(20.0, 2);
        heap.push(30.0, 3);

        heap.change_priority(3, 5.0);

        assert_invariants(&heap);
        assert_eq!(heap.top_element(), 3);
        assert_eq!(heap.priority(3), 5.0);
        assert_eq!(heap.pop(), 3);
    }

    #[test]
    fn test_change_priority_increase_sinks_element() {
        let mut heap = IndexedMinHeap::new();
        heap.push(1.0, 1);
        heap.push(2.0, 2);
        heap.push(3.0, 3);

        heap.change_priority(1, 50.0);

        assert_invariants(&heap);
        assert_eq!(heap.pop(), 2);
        assert_eq!(heap.pop(), 3);
        assert_eq!(heap.pop(), 1);
    }

    #[test]
    fn test_contains_and_priority_track_membership() {
        let mut heap = IndexedMinHeap::new();
        heap.push(4.0, 9);

        assert!(heap.contains(9));
        assert!(!heap.contains(8));
        assert_eq!(heap.priority(9), 4.0);

        heap.pop();
        assert!(!heap.contains(9));
    }

    #[test]
    fn test_clear_resets_both_structures() {
        let mut heap = IndexedMinHeap::new();
        heap.push(1.0, 1);
        heap.push(2.0, 2);

        heap.clear();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert!(!heap.contains(1));
    }

    #[test]
    fn test_interleaved_operations_keep_invariants() {
        let mut heap = IndexedMinHeap::new();
        for (i, priority) in [9.0, 4.0, 7.0, 1.0, 8.0, 2.0, 6.0, 3.0].iter().enumerate() {
            heap.push(*priority, i);
            assert_invariants(&heap);
        }

        heap.change_priority(0, 0.5);
        assert_invariants(&heap);
        assert_eq!(heap.pop(), 0);
        assert_invariants(&heap);

        heap.change_priority(4, 100.0);
        assert_invariants(&heap);
        heap.push(5.5, 20);
        assert_invariants(&heap);

        let drained = drain_priorities(&mut heap);
        let mut sorted = drained.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(drained, sorted);
    }

    #[test]
    fn test_pop_stops_sifting_at_ordered_subtree() {
        // After the first pop the old last leaf (priority 7) lands at the
        // root and must stop sinking once both children below it are
        // larger, leaving a valid heap behind.
        let mut heap = heap_from_slots(&[
            (0.0, 0),
            (50.0, 1),
            (1.0, 2),
            (51.0, 3),
            (52.0, 4),
            (2.0, 5),
            (3.0, 6),
            (100.0, 7),
            (101.0, 8),
            (102.0, 9),
            (103.0, 10),
            (8.0, 11),
            (9.0, 12),
            (6.0, 13),
            (7.0, 14),
        ]);

        assert_eq!(heap.pop(), 0);
        assert_invariants(&heap);

        let drained = drain_priorities(&mut heap);
        let mut sorted = drained.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(drained, sorted);
    }

    #[test]
    fn test_pop_on_single_element_empties_heap() {
        let mut heap = IndexedMinHeap::new();
        heap.push(1.0, 42);

        assert_eq!(heap.pop(), 42);
        assert!(heap.is_empty());
        assert!(!heap.contains(42));
    }

    #[test]
    fn test_push_accepts_infinite_priority() {
        // Dijkstra seeds unreached vertices at infinity.
        let mut heap = IndexedMinHeap::new();
        heap.push(f64::INFINITY, 1);
        heap.push(0.0, 0);

        assert_eq!(heap.pop(), 0);
        assert_eq!(heap.pop(), 1);
    }

    #[test]
    #[should_panic(expected = "already in the heap")]
    fn test_push_duplicate_element_panics() {
        let mut heap = IndexedMinHeap::new();
        heap.push(1.0, 1);
        heap.push(2.0, 1);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_push_negative_priority_panics() {
        let mut heap = IndexedMinHeap::new();
        heap.push(-1.0, 1);
    }

    #[test]
    #[should_panic(expected = "empty heap")]
    fn test_pop_empty_panics() {
        let mut heap = IndexedMinHeap::new();
        heap.pop();
    }

    #[test]
    #[should_panic(expected = "not in the heap")]
    fn test_change_priority_absent_element_panics() {
        let mut heap = IndexedMinHeap::new();
        heap.change_priority(5, 1.0);
    }
}

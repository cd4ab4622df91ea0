use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    hash::Hash,
};

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Min-ordered priority queue with support for changing the priority of
/// queued items.
///
/// Each item is queued at most once. Pushing an item that is already queued
/// replaces its priority. Items with equal priorities are popped in the order
/// in which their current priority was set.
///
/// Priority changes are implemented by lazy deletion: the heap may contain
/// stale entries for an item, but only the entry carrying the item's current
/// stamp is ever returned.
#[derive(Debug)]
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Reverse<Entry<T, P>>>,
    live: FxHashMap<T, (P, u64)>,
    stamp: u64,
}

#[derive(Debug)]
struct Entry<T, P> {
    priority: P,
    stamp: u64,
    item: T,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.stamp.cmp(&other.stamp))
    }
}

/// The error encountered during [`PriorityQueue::decrease_priority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecreasePriorityError {
    /// The item is not in the queue.
    #[error("item is not queued")]
    NotQueued,

    /// The new priority is not smaller than the current one.
    #[error("new priority is not smaller than the current priority")]
    NotDecreased,
}

impl<T, P> PriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Ord + Clone,
{
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: FxHashMap::default(),
            stamp: 0,
        }
    }

    /// Number of queued items, not counting stale entries.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.live.contains_key(item)
    }

    /// Current priority of a queued item.
    pub fn priority(&self, item: &T) -> Option<&P> {
        self.live.get(item).map(|(priority, _)| priority)
    }

    /// Queues the item with given priority. Returns the previous priority if
    /// the item was already queued.
    pub fn push(&mut self, item: T, priority: P) -> Option<P> {
        self.stamp += 1;

        let prev = self
            .live
            .insert(item.clone(), (priority.clone(), self.stamp))
            .map(|(prev, _)| prev);

        self.heap.push(Reverse(Entry {
            priority,
            stamp: self.stamp,
            item,
        }));

        prev
    }

    /// Lowers the priority of a queued item.
    pub fn decrease_priority(&mut self, item: &T, priority: P) -> Result<(), DecreasePriorityError> {
        match self.live.get(item) {
            None => Err(DecreasePriorityError::NotQueued),
            Some((current, _)) if priority >= *current => Err(DecreasePriorityError::NotDecreased),
            Some(_) => {
                self.push(item.clone(), priority);
                Ok(())
            }
        }
    }

    /// Removes and returns the item with the minimum priority.
    pub fn pop_min(&mut self) -> Option<(T, P)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let fresh = matches!(self.live.get(&entry.item), Some((_, stamp)) if *stamp == entry.stamp);

            if fresh {
                self.live.remove(&entry.item);
                return Some((entry.item, entry.priority));
            }
        }

        None
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    T: Clone + Eq + Hash,
    P: Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use super::*;

    fn drain<T, P>(queue: &mut PriorityQueue<T, P>) -> Vec<(T, P)>
    where
        T: Clone + Eq + Hash,
        P: Ord + Clone,
    {
        std::iter::from_fn(|| queue.pop_min()).collect()
    }

    #[test]
    fn new_queue_is_empty() {
        let mut queue = PriorityQueue::<&str, u32>::new();

        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.pop_min(), None);
    }

    #[test]
    fn pops_by_priority() {
        let mut queue = PriorityQueue::new();
        queue.push("D", 4);
        queue.push("A", 5);
        queue.push("B", 3);
        queue.push("C", 7);

        assert_eq!(queue.pop_min(), Some(("B", 3)));
        assert_eq!(queue.pop_min(), Some(("D", 4)));

        queue.push("E", 1);

        assert_eq!(drain(&mut queue), vec![("E", 1), ("A", 5), ("C", 7)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn ties_are_broken_by_insertion_order() {
        let mut queue = PriorityQueue::new();
        queue.push("x", 1);
        queue.push("b", 1);
        queue.push("a", 1);

        assert_eq!(drain(&mut queue), vec![("x", 1), ("b", 1), ("a", 1)]);
    }

    #[test]
    fn push_replaces_priority() {
        let mut queue = PriorityQueue::new();
        queue.push("D", 4);
        queue.push("A", 5);
        queue.push("B", 3);
        queue.push("C", 7);

        assert_eq!(queue.push("D", 1), Some(4));
        assert_eq!(queue.push("C", 2), Some(7));
        assert_eq!(queue.len(), 4);

        assert_eq!(
            drain(&mut queue),
            vec![("D", 1), ("C", 2), ("B", 3), ("A", 5)]
        );
    }

    #[test]
    fn reprioritized_items_are_counted_once() {
        let mut queue = PriorityQueue::new();
        queue.push("A", 5);
        queue.push("B", 4);
        queue.push("A", 3);
        queue.push("B", 6);

        assert_eq!(queue.len(), 2);

        queue.pop_min();
        queue.pop_min();

        assert!(queue.is_empty());
        assert_eq!(queue.pop_min(), None);
    }

    #[test]
    fn stale_entries_do_not_resurrect_popped_items() {
        let mut queue = PriorityQueue::new();
        queue.push("A", 7);
        queue.push("B", 4);
        queue.pop_min();
        queue.push("A", 3);
        queue.pop_min();

        assert!(queue.is_empty());
        assert_eq!(queue.pop_min(), None);
    }

    #[test]
    fn decrease_priority() {
        let mut queue = PriorityQueue::new();
        queue.push("A", 5);
        queue.push("B", 4);

        assert_eq!(queue.decrease_priority(&"A", 1), Ok(()));
        assert_eq!(queue.priority(&"A"), Some(&1));
        assert_eq!(queue.pop_min(), Some(("A", 1)));
    }

    #[test]
    fn decrease_priority_rejects_larger_or_equal() {
        let mut queue = PriorityQueue::new();
        queue.push("A", 5);

        assert_matches!(
            queue.decrease_priority(&"A", 5),
            Err(DecreasePriorityError::NotDecreased)
        );
        assert_matches!(
            queue.decrease_priority(&"A", 6),
            Err(DecreasePriorityError::NotDecreased)
        );
        assert_eq!(queue.priority(&"A"), Some(&5));
    }

    #[test]
    fn decrease_priority_of_absent_item() {
        let mut queue = PriorityQueue::<&str, i32>::new();

        assert_matches!(
            queue.decrease_priority(&"A", 1),
            Err(DecreasePriorityError::NotQueued)
        );
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_pop_order_matches_last_priorities(ops in prop::collection::vec((0u8..16, 0u16..64), 0..256)) {
            let mut queue = PriorityQueue::new();
            let mut expected = FxHashMap::default();

            for (item, priority) in ops {
                queue.push(item, priority);
                expected.insert(item, priority);
            }

            prop_assert_eq!(queue.len(), expected.len());

            let popped = drain(&mut queue);
            prop_assert_eq!(popped.len(), expected.len());

            for window in popped.windows(2) {
                prop_assert!(window[0].1 <= window[1].1);
            }

            for (item, priority) in popped {
                prop_assert_eq!(expected.get(&item), Some(&priority));
            }
        }
    }
}

//! # Ring Queue Implementation
//!
//! A fixed-size circular FIFO that refuses new elements when full.
//!
//! ## Plain English
//!
//! Picture a circular track with numbered parking spots.
//! Cars leave from the front and new cars park right behind the last one.
//! When every spot is taken, the next car is turned away at the gate
//! instead of towing anybody.

use std::fmt;
use std::iter::FusedIterator;

/// A fixed-capacity circular queue.
///
/// ## Properties
/// - Fixed capacity (doesn't grow)
/// - O(1) enqueue and dequeue
/// - Rejects new items when full (nothing is overwritten)
/// - Maintains insertion order
///
/// The logical i-th element lives at slot `(head + i) % capacity`.
pub struct RingQueue<T> {
    /// Backing slots, allocated once
    slots: Box<[Option<T>]>,

    /// Physical index of the front element
    head: usize,

    /// Number of items currently stored
    count: usize,
}

impl<T> RingQueue<T> {
    /// Creates a new queue with room for `capacity` items.
    ///
    /// ## Panics
    /// If `capacity` is zero.
    ///
    /// ## Example
    /// ```
    /// # use tetris_queue::buffer::RingQueue;
    /// let queue: RingQueue<i32> = RingQueue::new(8);
    /// assert_eq!(queue.capacity(), 8);
    /// assert!(queue.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring queue capacity must be greater than zero");

        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            count: 0,
        }
    }

    /// Adds an item at the tail.
    ///
    /// If the queue is full the item is handed back in `Err` and
    /// nothing changes.
    pub fn enqueue(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }

        let tail = self.physical(self.count);
        self.slots[tail] = Some(item);
        self.count += 1;
        Ok(())
    }

    /// Removes and returns the item at the head, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.count -= 1;
        item
    }

    /// Returns the number of items currently stored.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if the queue is at capacity.
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the item that would be dequeued next.
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the most recently admitted item.
    pub fn back(&self) -> Option<&T> {
        self.count.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Returns the logical `index`-th item counted from the head.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    /// Drops every stored item. Capacity is unchanged.
    pub fn clear(&mut self) {
        while self.dequeue().is_some() {}
        self.head = 0;
    }

    /// Returns an iterator over all items (front to back).
    ///
    /// The iterator borrows the queue, so it can be created again at any
    /// time and never mutates anything.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            offset: 0,
        }
    }

    /// Releases the backing storage.
    ///
    /// Takes `self` by value, so the queue can't be touched afterwards.
    pub fn teardown(self) {
        log::debug!(
            "Releasing ring queue storage ({} slots, {} items left)",
            self.capacity(),
            self.count
        );
    }

    fn physical(&self, logical: usize) -> usize {
        (self.head + logical) % self.capacity()
    }
}

impl<T: Clone> RingQueue<T> {
    /// Returns cloned copies of all items (front first).
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("capacity", &self.capacity())
            .field("head", &self.head)
            .field("items", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================
// ITERATION
// ============================================

/// Front-to-back iterator over a [`RingQueue`].
pub struct Iter<'a, T> {
    queue: &'a RingQueue<T>,
    offset: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.queue.get(self.offset)?;
        self.offset += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len().saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            queue: self.queue,
            offset: self.offset,
        }
    }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_queue() {
        let queue: RingQueue<i32> = RingQueue::new(5);
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 5);
    }

    #[test]
    #[should_panic(expected = "greater than zero")]
    fn test_zero_capacity_panics() {
        let _queue: RingQueue<i32> = RingQueue::new(0);
    }

    #[test]
    fn test_enqueue_single() {
        let mut queue = RingQueue::new(5);
        assert_eq!(queue.enqueue(42), Ok(()));

        assert!(!queue.is_empty());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.front(), Some(&42));
        assert_eq!(queue.back(), Some(&42));
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = RingQueue::new(5);

        for i in 1..=3 {
            queue.enqueue(i).unwrap();
        }

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_full_rejects_without_mutation() {
        let mut queue = RingQueue::new(3);

        for i in 1..=3 {
            queue.enqueue(i).unwrap();
        }
        assert!(queue.is_full());

        // The rejected item comes back untouched
        assert_eq!(queue.enqueue(4), Err(4));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn test_dequeue_empty() {
        let mut queue: RingQueue<i32> = RingQueue::new(2);
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
        assert_eq!(queue.front(), None);
        assert_eq!(queue.back(), None);
    }

    #[test]
    fn test_wraparound() {
        let mut queue = RingQueue::new(3);

        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));

        // Tail wraps to physical slots 0 and 1
        queue.enqueue(4).unwrap();
        queue.enqueue(5).unwrap();
        assert!(queue.is_full());

        assert_eq!(queue.to_vec(), vec![3, 4, 5]);
        assert_eq!(queue.front(), Some(&3));
        assert_eq!(queue.back(), Some(&5));
        assert_eq!(queue.get(1), Some(&4));
        assert_eq!(queue.get(3), None);
    }

    #[test]
    fn test_iterator_is_restartable() {
        let mut queue = RingQueue::new(4);
        for i in 0..4 {
            queue.enqueue(i).unwrap();
        }
        queue.dequeue();
        queue.enqueue(9).unwrap();

        let first: Vec<_> = queue.iter().copied().collect();
        let second: Vec<_> = (&queue).into_iter().copied().collect();
        assert_eq!(first, vec![1, 2, 3, 9]);
        assert_eq!(first, second);
        assert_eq!(queue.iter().len(), 4);
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn test_clear() {
        let mut queue = RingQueue::new(5);

        for i in 1..=3 {
            queue.enqueue(i).unwrap();
        }

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), 5);
        assert_eq!(queue.iter().count(), 0);
    }

    #[test]
    fn test_capacity_one() {
        let mut queue = RingQueue::new(1);

        for i in 0..5 {
            assert_eq!(queue.enqueue(i), Ok(()));
            assert_eq!(queue.enqueue(100), Err(100));
            assert_eq!(queue.dequeue(), Some(i));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_teardown_consumes() {
        let mut queue = RingQueue::new(2);
        queue.enqueue(String::from("T")).unwrap();
        queue.teardown();
    }
}

use crate::{Node, PriorityQueue};
use prioq_core::Task;
use std::iter::FusedIterator;

/// Borrowing iterator over a queue's tasks, head to tail.
///
/// Created by [`PriorityQueue::iter`]. Each iterator carries its own cursor,
/// so any number of them can walk the same queue at once. The queue cannot
/// be mutated while one is alive.
#[derive(Debug)]
pub struct Iter<'a, T> {
    cursor: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(head: Option<&'a Node<T>>, len: usize) -> Self {
        Iter {
            cursor: head,
            remaining: len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.cursor?;
        self.cursor = node.next();
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.task())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that drains a queue in priority order
#[derive(Debug)]
pub struct IntoIter<T: Task> {
    queue: PriorityQueue<T>,
}

impl<T: Task> IntoIter<T> {
    pub(crate) fn new(queue: PriorityQueue<T>) -> Self {
        IntoIter { queue }
    }
}

impl<T: Task> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.deque()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T: Task> ExactSizeIterator for IntoIter<T> {}

impl<T: Task> FusedIterator for IntoIter<T> {}

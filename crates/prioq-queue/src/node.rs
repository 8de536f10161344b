use prioq_core::Task;
use std::fmt;

/// A single cell of the queue's chain.
///
/// Each node owns its successor, so a chain can neither share a tail nor
/// form a cycle.
///
/// Dropping a node drops its successors recursively. A chain built by hand
/// that is long enough to exhaust the stack must be unlinked with
/// [`Node::take_next`] first; [`PriorityQueue`](crate::PriorityQueue) does
/// this for the chains it owns.
pub struct Node<T> {
    task: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// Create a terminal node
    pub fn new(task: T) -> Self {
        Node { task, next: None }
    }

    /// Create a node in front of `next`
    pub fn with_next(task: T, next: Option<Box<Node<T>>>) -> Self {
        Node { task, next }
    }

    pub fn task(&self) -> &T {
        &self.task
    }

    pub fn into_task(self) -> T {
        self.task
    }

    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    /// Replace the successor, taking ownership of `next`. The previous
    /// successor is handed back to the caller.
    pub fn set_next(&mut self, next: Option<Box<Node<T>>>) -> Option<Box<Node<T>>> {
        std::mem::replace(&mut self.next, next)
    }

    /// Detach and return the successor, leaving this node terminal
    pub fn take_next(&mut self) -> Option<Box<Node<T>>> {
        self.next.take()
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub(crate) fn next_link_mut(&mut self) -> &mut Option<Box<Node<T>>> {
        &mut self.next
    }
}

/// Shows the held task and whether a successor exists, without walking the
/// chain.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("task", &self.task)
            .field("has_next", &self.has_next())
            .finish()
    }
}

impl<T: Task> Node<T> {
    pub fn priority(&self) -> T::Priority {
        self.task.priority()
    }

    pub fn set_priority(&mut self, priority: T::Priority) {
        self.task.set_priority(priority);
    }
}

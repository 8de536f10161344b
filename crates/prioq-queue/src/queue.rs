use crate::{IntoIter, Iter, Node};
use prioq_core::Task;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Add;
use tracing::{debug, trace};

type Link<T> = Option<Box<Node<T>>>;

/// Priority queue over a singly-linked chain of tasks.
///
/// The chain is sorted by descending priority. A task is inserted after every
/// task whose priority is not lower than its own, so ties are served in
/// insertion order.
///
/// The queue has no internal locking; wrap it in a mutex to share it between
/// threads.
pub struct PriorityQueue<T> {
    head: Link<T>,
    length: usize,
}

/// `true` when `a` is strictly higher than `b`. Incomparable priorities never
/// outrank each other.
fn outranks<P: PartialOrd>(a: P, b: P) -> bool {
    a > b
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        PriorityQueue {
            head: None,
            length: 0,
        }
    }

    /// Number of tasks in the queue
    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Start a new pass over the tasks, highest priority first
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head(), self.length)
    }

    pub(crate) fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    /// Highest priority task, without removing it
    pub fn peek(&self) -> Option<&T> {
        self.head().map(Node::task)
    }
}

impl<T: Task> PriorityQueue<T> {
    /// Build a queue by enqueuing `tasks` one by one, in order
    pub fn from_tasks(tasks: impl IntoIterator<Item = T>) -> Self {
        let mut queue = PriorityQueue::new();
        queue.extend(tasks);
        queue
    }

    /// Insert a task behind every task whose priority is not lower than its
    /// own. O(n).
    pub fn enque(&mut self, task: T) {
        self.length += 1;
        let priority = task.priority();

        let mut link = &mut self.head;
        let mut position = 0usize;
        while link
            .as_deref()
            .is_some_and(|node| !outranks(priority, node.priority()))
        {
            if let Some(node) = link {
                link = node.next_link_mut();
                position += 1;
            }
        }

        let rest = link.take();
        *link = Some(Box::new(Node::with_next(task, rest)));

        trace!(?priority, position, length = self.length, "enqueued task");
    }

    /// Remove and return the highest priority task
    pub fn deque(&mut self) -> Option<T> {
        let mut node = self.head.take()?;
        self.head = node.take_next();
        self.length -= 1;

        trace!(length = self.length, "dequeued task");
        Some(node.into_task())
    }

    /// Give the first task (head to tail) whose priority equals `old` the
    /// priority `new`, moving it if it no longer fits between its neighbours.
    ///
    /// Returns `false`, leaving the queue untouched, when no task has
    /// priority `old`.
    pub fn change_priority(&mut self, old: T::Priority, new: T::Priority) -> bool {
        let mut previous = None;
        let mut found = None;
        for (index, task) in self.iter().enumerate() {
            if task.priority() == old {
                found = Some(index);
                break;
            }
            previous = Some(task.priority());
        }

        let Some(position) = found else {
            debug!(?old, "no task with matching priority");
            return false;
        };

        let mut link = &mut self.head;
        for _ in 0..position {
            if let Some(node) = link {
                link = node.next_link_mut();
            }
        }

        let Some(node) = link.as_mut() else {
            return false;
        };
        node.set_priority(new);

        // A missing neighbour never forces a move.
        let above_previous = previous.is_some_and(|p| outranks(new, p));
        let below_next = node.next().is_some_and(|next| outranks(next.priority(), new));
        if !above_previous && !below_next {
            debug!(?old, ?new, position, "changed priority in place");
            return true;
        }

        if let Some(mut node) = link.take() {
            *link = node.take_next();
            self.length -= 1;
            debug!(?old, ?new, position, "relocating task");
            self.enque(node.into_task());
        }
        true
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for PriorityQueue<T> {
    fn drop(&mut self) {
        // Unlink node by node so long chains do not recurse through Box drops.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.take_next();
        }
    }
}

impl<T: Clone> Clone for PriorityQueue<T> {
    fn clone(&self) -> Self {
        // The chain is already sorted, so rebuild it back to front instead of
        // going through enque.
        let tasks: Vec<&T> = self.iter().collect();
        let mut head = None;
        for task in tasks.into_iter().rev() {
            head = Some(Box::new(Node::with_next(task.clone(), head)));
        }
        PriorityQueue {
            head,
            length: self.length,
        }
    }
}

impl<T: Task> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_tasks(iter)
    }
}

impl<T: Task> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for task in iter {
            self.enque(task);
        }
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Task> IntoIterator for PriorityQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

/// `a + b` holds every task of `b` followed by every task of `a`, each
/// re-inserted with `enque`.
impl<T: Task + Clone> Add for &PriorityQueue<T> {
    type Output = PriorityQueue<T>;

    fn add(self, other: Self) -> PriorityQueue<T> {
        other.iter().chain(self.iter()).cloned().collect()
    }
}

impl<T: Task> Add for PriorityQueue<T> {
    type Output = PriorityQueue<T>;

    fn add(self, other: PriorityQueue<T>) -> PriorityQueue<T> {
        other.into_iter().chain(self).collect()
    }
}

/// Queues are equal when they hold equal tasks in the same chain order.
impl<T: Task> PartialEq for PriorityQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Task + Eq> Eq for PriorityQueue<T> {}

impl<T: fmt::Display> fmt::Display for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, task) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{task}")?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Serialize> Serialize for PriorityQueue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Task + Deserialize<'de>> Deserialize<'de> for PriorityQueue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(PriorityQueue::from_tasks)
    }
}

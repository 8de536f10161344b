//! Singly-linked priority queue.
//!
//! Tasks are kept in a chain of owned [`Node`]s sorted by descending
//! priority. Equal priorities keep their insertion order.

mod iter;
mod node;
mod queue;

pub use iter::{IntoIter, Iter};
pub use node::Node;
pub use queue::PriorityQueue;

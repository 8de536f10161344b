//! Core types for the linked priority queue: the [`Task`] boundary the queue
//! is generic over, the [`Priority`] value type and the [`StringTask`] used
//! by the admin driver and tests.

mod error;
mod priority;
mod task;

pub use error::{Result, TaskError};
pub use priority::Priority;
pub use task::{StringTask, Task};

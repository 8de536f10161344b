use crate::{Result, TaskError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Priority of a task. Higher values are served first.
///
/// Always finite, which makes the type totally ordered. `-0.0` is stored as
/// `0.0` so equal priorities also hash equally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Priority(f64);

impl Priority {
    pub const ZERO: Priority = Priority(0.0);

    /// Create a new priority value, rejecting NaN and infinities
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(TaskError::InvalidPriority(value));
        }
        // Adding 0.0 turns -0.0 into 0.0 and leaves everything else alone.
        Ok(Priority(value + 0.0))
    }

    /// Get the raw priority value
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Priority {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Priority {
    type Error = TaskError;

    fn try_from(value: f64) -> Result<Self> {
        Priority::new(value)
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Priority(f64::from(value))
    }
}

impl From<u8> for Priority {
    fn from(value: u8) -> Self {
        Priority(f64::from(value))
    }
}

impl From<Priority> for f64 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl std::str::FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<f64>()
            .map_err(|source| TaskError::UnparsablePriority {
                input: trimmed.to_string(),
                source,
            })?;
        Priority::new(value)
    }
}

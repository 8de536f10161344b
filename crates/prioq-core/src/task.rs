use crate::{Priority, Result, TaskError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An item that can be held by a priority queue.
///
/// The queue only needs to read and rewrite the priority, compare tasks for
/// equality and render them for display.
pub trait Task: PartialEq + fmt::Display {
    /// Priority type. Higher values are served first.
    type Priority: PartialOrd + Copy + fmt::Debug;

    fn priority(&self) -> Self::Priority;

    fn set_priority(&mut self, priority: Self::Priority);
}

/// A task described by a line of text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringTask {
    /// Human readable description (e.g., "send_email")
    pub text: String,

    /// Priority (higher = more urgent)
    pub priority: Priority,
}

impl StringTask {
    /// Create a new task
    pub fn new(text: impl Into<String>, priority: impl Into<Priority>) -> Self {
        StringTask {
            text: text.into(),
            priority: priority.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Task for StringTask {
    type Priority = Priority;

    fn priority(&self) -> Priority {
        self.priority
    }

    fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }
}

impl fmt::Display for StringTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.priority)
    }
}

/// Parses the `text:priority` form. The split happens on the last `:` so the
/// text itself may contain colons.
impl FromStr for StringTask {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        let (text, priority) = s
            .rsplit_once(':')
            .ok_or_else(|| TaskError::MalformedTask(s.to_string()))?;

        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        Ok(StringTask {
            text: text.to_string(),
            priority: priority.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = StringTask::new("send_email", 3);

        assert_eq!(task.text(), "send_email");
        assert_eq!(task.priority(), Priority::from(3));
    }

    #[test]
    fn test_set_priority() {
        let mut task = StringTask::new("resize", 1);
        task.set_priority(Priority::from(9));

        assert_eq!(task.priority, Priority::from(9));
    }

    #[test]
    fn test_equality_covers_priority() {
        let a = StringTask::new("a", 1);
        let mut b = StringTask::new("a", 1);
        assert_eq!(a, b);

        b.set_priority(Priority::from(2));
        assert_ne!(a, b);
        assert_ne!(a, StringTask::new("b", 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(StringTask::new("email", 3).to_string(), "email (3)");
        let task = StringTask::new("fractional", Priority::new(0.5).unwrap());
        assert_eq!(task.to_string(), "fractional (0.5)");
    }

    #[test]
    fn test_parse() {
        let task: StringTask = "backup:db:7".parse().unwrap();
        assert_eq!(task, StringTask::new("backup:db", 7));

        let task: StringTask = " notify : 1.5 ".parse().unwrap();
        assert_eq!(task.text, "notify");
        assert_eq!(task.priority, Priority::new(1.5).unwrap());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "no-priority".parse::<StringTask>(),
            Err(TaskError::MalformedTask("no-priority".to_string()))
        );
        assert_eq!(":4".parse::<StringTask>(), Err(TaskError::EmptyDescription));
        assert!(matches!(
            "task:soon".parse::<StringTask>(),
            Err(TaskError::UnparsablePriority { .. })
        ));
        assert!(matches!(
            "task:NaN".parse::<StringTask>(),
            Err(TaskError::InvalidPriority(_))
        ));
    }

    #[test]
    fn test_task_serialization() {
        let task = StringTask::new("report", 4);

        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"text":"report","priority":4.0}"#);
        let deserialized: StringTask = serde_json::from_str(&json).unwrap();
        assert_eq!(task, deserialized);
    }
}

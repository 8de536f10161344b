use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TaskError {
    #[error("Invalid priority value: {0}")]
    InvalidPriority(f64),

    #[error("Could not parse priority {input:?}: {source}")]
    UnparsablePriority {
        input: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Malformed task {0:?}: expected text:priority")]
    MalformedTask(String),

    #[error("Task description must not be empty")]
    EmptyDescription,
}

pub type Result<T> = std::result::Result<T, TaskError>;

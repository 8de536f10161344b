//! Support code for `pq-admin`, a command-line driver that builds priority
//! queues from task files and runs queue operations on them.

pub mod commands;
pub mod config;
pub mod loader;
pub mod render;

pub use commands::{Cli, Commands, TaskSource};
pub use config::{AdminConfig, LoggingConfig, OutputConfig, OutputFormat};

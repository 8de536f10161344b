//! CLI commands for inspecting priority queues.

use crate::loader::build_queue;
use crate::render::{render_change, render_comparison, render_drain, render_queue};
use crate::OutputFormat;
use clap::{Args, Parser, Subcommand};
use prioq_core::{Priority, StringTask};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pq-admin")]
#[command(about = "Priority Queue Admin CLI", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "pq-admin.yaml")]
    pub config: PathBuf,

    /// Output format, overrides the configuration file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log filter, overrides the configuration file (RUST_LOG wins over both)
    #[arg(long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Task files plus inline tasks
#[derive(Args, Debug, Clone, Default)]
pub struct TaskSource {
    /// YAML or JSON task files
    pub files: Vec<PathBuf>,

    /// Inline task as text:priority (repeatable)
    #[arg(short, long = "task")]
    pub tasks: Vec<StringTask>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the queue built from the given tasks
    Show {
        #[command(flatten)]
        source: TaskSource,
    },

    /// Dequeue every task, printing them in service order
    Drain {
        #[command(flatten)]
        source: TaskSource,
    },

    /// Change the priority of the first task with priority OLD
    Change {
        #[command(flatten)]
        source: TaskSource,

        /// Priority to look for
        #[arg(long, allow_hyphen_values = true)]
        old: Priority,

        /// Priority to assign
        #[arg(long, allow_hyphen_values = true)]
        new: Priority,
    },

    /// Print LEFT + RIGHT
    Merge {
        left: PathBuf,
        right: PathBuf,
    },

    /// Report whether two task files produce equal queues
    Compare {
        left: PathBuf,
        right: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

impl Commands {
    /// Run the command and return what should be printed
    pub fn execute(&self, format: OutputFormat) -> anyhow::Result<String> {
        match self {
            Commands::Show { source } => {
                let queue = build_queue(&source.files, &source.tasks)?;
                render_queue(&queue, format)
            }

            Commands::Drain { source } => {
                let queue = build_queue(&source.files, &source.tasks)?;
                render_drain(queue, format)
            }

            Commands::Change { source, old, new } => {
                let mut queue = build_queue(&source.files, &source.tasks)?;
                let found = queue.change_priority(*old, *new);
                render_change(&queue, found, *old, *new, format)
            }

            Commands::Merge { left, right } => {
                let left = build_queue(std::slice::from_ref(left), &[])?;
                let right = build_queue(std::slice::from_ref(right), &[])?;
                render_queue(&(left + right), format)
            }

            Commands::Compare { left, right } => {
                let left = build_queue(std::slice::from_ref(left), &[])?;
                let right = build_queue(std::slice::from_ref(right), &[])?;
                tracing::info!(equal = left == right, left = left.len(), right = right.len(), "compared queues");
                render_comparison(&left, &right, format)
            }
        }
    }
}

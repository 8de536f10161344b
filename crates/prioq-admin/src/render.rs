use crate::OutputFormat;
use comfy_table::{presets::UTF8_FULL, Table};
use prioq_core::{Priority, StringTask};
use prioq_queue::PriorityQueue;
use serde::Serialize;

/// Outcome of `change`, as written for json/yaml
#[derive(Debug, Serialize)]
struct ChangeReport<'a> {
    found: bool,
    old: Priority,
    new: Priority,
    queue: &'a PriorityQueue<StringTask>,
}

/// Outcome of `compare`, as written for json/yaml
#[derive(Debug, Serialize)]
struct Comparison {
    equal: bool,
    left_len: usize,
    right_len: usize,
}

fn task_table<'a>(tasks: impl Iterator<Item = &'a StringTask>, first: usize) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Task", "Priority"]);
    for (position, task) in tasks.enumerate() {
        table.add_row(vec![
            (position + first).to_string(),
            task.text.clone(),
            task.priority.to_string(),
        ]);
    }
    table
}

pub fn render_queue(queue: &PriorityQueue<StringTask>, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(queue)?,
        OutputFormat::Yaml => serde_yaml::to_string(queue)?,
        OutputFormat::Plain => queue.to_string(),
        OutputFormat::Table => task_table(queue.iter(), 0).to_string(),
    };
    Ok(rendered)
}

/// Every task in the order `deque` hands them out, numbered from 1
pub fn render_drain(queue: PriorityQueue<StringTask>, format: OutputFormat) -> anyhow::Result<String> {
    let drained: Vec<StringTask> = queue.into_iter().collect();
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&drained)?,
        OutputFormat::Yaml => serde_yaml::to_string(&drained)?,
        OutputFormat::Table => task_table(drained.iter(), 1).to_string(),
        OutputFormat::Plain => drained
            .iter()
            .enumerate()
            .map(|(position, task)| format!("{}. {task}", position + 1))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(rendered)
}

/// Result of `change_priority` followed by the resulting queue
pub fn render_change(
    queue: &PriorityQueue<StringTask>,
    found: bool,
    old: Priority,
    new: Priority,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let report = ChangeReport { found, old, new, queue };
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Yaml => serde_yaml::to_string(&report)?,
        OutputFormat::Plain | OutputFormat::Table => {
            let summary = if found {
                format!("Changed priority {old} -> {new}")
            } else {
                format!("No task with priority {old}")
            };
            format!("{summary}\n{}", render_queue(queue, format)?)
        }
    };
    Ok(rendered)
}

pub fn render_comparison(
    left: &PriorityQueue<StringTask>,
    right: &PriorityQueue<StringTask>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let comparison = Comparison {
        equal: left == right,
        left_len: left.len(),
        right_len: right.len(),
    };
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&comparison)?,
        OutputFormat::Yaml => serde_yaml::to_string(&comparison)?,
        OutputFormat::Plain if comparison.equal => "equal".to_string(),
        OutputFormat::Plain => "not equal".to_string(),
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Field", "Value"]);
            table.add_row(vec!["Equal".to_string(), comparison.equal.to_string()]);
            table.add_row(vec!["Left tasks".to_string(), comparison.left_len.to_string()]);
            table.add_row(vec!["Right tasks".to_string(), comparison.right_len.to_string()]);
            table.to_string()
        }
    };
    Ok(rendered)
}

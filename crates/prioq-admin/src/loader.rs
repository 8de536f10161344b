//! Reading tasks from YAML or JSON task files.

use anyhow::Context;
use prioq_core::StringTask;
use prioq_queue::PriorityQueue;
use std::path::Path;

/// Read a list of `{ text, priority }` entries. Files ending in `.json` are
/// parsed as JSON, everything else as YAML.
pub fn load_tasks(path: &Path) -> anyhow::Result<Vec<StringTask>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading task file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let tasks: Vec<StringTask> = if is_json {
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing JSON task file {}", path.display()))?
    } else {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing YAML task file {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Enqueue the tasks of every file in order, then the inline tasks
pub fn build_queue<P: AsRef<Path>>(
    files: &[P],
    inline: &[StringTask],
) -> anyhow::Result<PriorityQueue<StringTask>> {
    let mut queue = PriorityQueue::new();
    for file in files {
        queue.extend(load_tasks(file.as_ref())?);
    }
    queue.extend(inline.iter().cloned());
    Ok(queue)
}

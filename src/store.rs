use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::model::Task;

/// Status line text written for a completed task.
pub const DONE_STATUS: &str = "task is done ✓";

/// Substring tested when reconstructing `done` from a status line.
const DONE_MARKER: &str = "task is done";

/// Ordered task list mirrored to a flat text file.
///
/// Every mutating operation writes the whole list back to disk before
/// returning, so memory and file stay in sync one operation at a time.
/// The save is a plain truncating overwrite, not an atomic rename; a crash
/// mid-write can leave the file truncated.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open a store backed by `path`. A missing file is an empty store,
    /// not an error; any other read failure propagates.
    pub fn load(path: impl Into<PathBuf>) -> Result<TaskStore> {
        let path = path.into();
        let tasks = match std::fs::read_to_string(&path) {
            Ok(contents) => parse_tasks(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()))
            }
        };
        Ok(TaskStore { path, tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a new pending task. Duplicate names are allowed; lookups
    /// later act on the first match.
    pub fn add(&mut self, name: impl Into<String>, description: impl Into<String>) -> Result<()> {
        self.tasks.push(Task::new(name, description));
        self.save()
    }

    /// Mark the first case-insensitive name match as done. Returns `false`
    /// (without saving) when no task matches.
    pub fn mark_done(&mut self, name: &str) -> Result<bool> {
        match self.tasks.iter_mut().find(|t| t.name_matches(name)) {
            Some(task) => {
                task.done = true;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the first case-insensitive name match, keeping the relative
    /// order of the remaining tasks. Returns `false` when no task matches.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        match self.tasks.iter().position(|t| t.name_matches(name)) {
            Some(i) => {
                self.tasks.remove(i);
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Overwrite the backing file with the current in-memory list.
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, serialize_tasks(&self.tasks))
            .with_context(|| format!("failed to write {}", self.path.display()))
    }

    /// Re-read the backing file directly, bypassing the in-memory list.
    /// Returns `None` when the file does not exist. External edits between
    /// operations will show up here before the next reload.
    pub fn read_raw(&self) -> Result<Option<Vec<Task>>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(parse_tasks(&contents))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", self.path.display())),
        }
    }
}

fn serialize_tasks(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        let status = if task.done { DONE_STATUS } else { "" };
        out.push_str(&format!(
            "Name: {}\nDescription: {}\nStatus: {}\n\n",
            task.name, task.description, status
        ));
    }
    out
}

/// Parse the three-line block format. The scan is prefix-driven: anything
/// before the next `Name: ` line is skipped and a truncated final block
/// loads as not-done. The description and status slots are peeked before
/// being consumed, so a `Name: ` line sitting where a description or
/// status belongs abandons the current block and starts the next one
/// instead of being swallowed with it. Malformed input degrades to fewer
/// tasks, never to corrupt ones.
fn parse_tasks(contents: &str) -> Vec<Task> {
    let mut tasks = Vec::new();
    let mut lines = contents.lines().peekable();
    while let Some(line) = lines.next() {
        let Some(name) = line.strip_prefix("Name: ") else {
            continue;
        };
        let Some(desc_line) = lines.peek().copied() else {
            break;
        };
        let Some(description) = desc_line.strip_prefix("Description: ") else {
            // Abandon the block; the offending line is re-examined by the
            // next iteration.
            continue;
        };
        lines.next();
        let done = match lines.peek() {
            Some(status) if !status.starts_with("Name: ") => {
                let done = status.contains(DONE_MARKER);
                lines.next();
                done
            }
            _ => false,
        };
        tasks.push(Task {
            name: name.to_string(),
            description: description.to_string(),
            done,
        });
    }
    tasks
}

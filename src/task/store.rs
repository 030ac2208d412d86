//! Task storage - JSON file persistence

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::{Result, Task, TaskError, TaskStatus};

/// File-backed task store. Every mutating operation reads the full task
/// list, applies the change in memory, and rewrites the file.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks)?;

        // Write to a temporary file next to the task file, then rename it
        // into place. A failed write must not truncate existing state.
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Add a task with the next free ID and return that ID.
    pub fn add(&self, description: &str) -> Result<u32> {
        let mut tasks = self.load()?;
        let id = next_id(&tasks);
        tasks.push(Task::new(id, description));
        self.save(&tasks)?;
        Ok(id)
    }

    /// Replace a task's description.
    pub fn update(&self, id: u32, description: &str) -> Result<()> {
        let mut tasks = self.load()?;
        let task = find_mut(&mut tasks, id)?;
        task.description = description.to_string();
        task.touch();
        self.save(&tasks)
    }

    /// Remove a task.
    pub fn delete(&self, id: u32) -> Result<()> {
        let mut tasks = self.load()?;
        let len_before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == len_before {
            return Err(TaskError::NotFound(id));
        }
        self.save(&tasks)
    }

    /// Move a task to the given status.
    pub fn set_status(&self, id: u32, status: TaskStatus) -> Result<()> {
        let mut tasks = self.load()?;
        let task = find_mut(&mut tasks, id)?;
        task.status = status;
        task.touch();
        self.save(&tasks)
    }

    /// All tasks, or only those matching `filter`, in store order.
    pub fn list(&self, filter: Option<TaskStatus>) -> Result<Vec<Task>> {
        let mut tasks = self.load()?;
        if let Some(status) = filter {
            tasks.retain(|t| t.status == status);
        }
        Ok(tasks)
    }
}

/// One past the highest existing ID, or 1 for an empty store.
fn next_id(tasks: &[Task]) -> u32 {
    tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}

fn find_mut(tasks: &mut [Task], id: u32) -> Result<&mut Task> {
    tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(TaskError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn temp_store(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::new(dir.path().join("tasks.json"))
    }

    #[test]
    fn test_store_roundtrip() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        let tasks = vec![Task::new(1, "first"), Task::new(2, "second")];
        store.save(&tasks)?;
        let loaded = store.load()?;

        assert_eq!(loaded, tasks);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_file() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_empty_file() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        fs::write(store.path(), "")?;
        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_whitespace_only_file() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        fs::write(store.path(), "   \n  \t  ")?;
        assert!(store.load()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_invalid_json() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        fs::write(store.path(), "{ invalid json }")?;
        assert!(matches!(store.load(), Err(TaskError::Parse(_))));
        Ok(())
    }

    #[test]
    fn test_save_is_pretty_printed() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        store.save(&[Task::new(1, "first")])?;
        let content = fs::read_to_string(store.path())?;

        assert!(content.contains('\n'));
        assert!(content.contains("\"description\": \"first\""));
        Ok(())
    }

    #[test]
    fn test_add_assigns_sequential_ids() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        assert_eq!(store.add("first")?, 1);
        assert_eq!(store.add("second")?, 2);
        assert_eq!(store.add("third")?, 3);

        let tasks = store.load()?;
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].description, "first");
        assert_eq!(tasks[0].status, TaskStatus::Todo);
        Ok(())
    }

    #[test]
    fn test_add_does_not_reuse_id_after_delete() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        store.add("A")?;
        store.add("B")?;
        store.delete(1)?;
        let id = store.add("C")?;

        assert_eq!(id, 3);
        let ids: Vec<u32> = store.load()?.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
        Ok(())
    }

    #[test]
    fn test_update_replaces_description_and_touches() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        let id = store.add("draft")?;
        let created_at = store.load()?[0].created_at;

        store.update(id, "final")?;
        let task = store.load()?.remove(0);

        assert_eq!(task.description, "final");
        assert_eq!(task.created_at, created_at);
        assert!(task.updated_at >= created_at);
        Ok(())
    }

    #[test]
    fn test_update_missing_id_leaves_store_unchanged() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        store.add("only")?;
        let before = store.load()?;

        assert!(matches!(store.update(42, "nope"), Err(TaskError::NotFound(42))));
        assert_eq!(store.load()?, before);
        Ok(())
    }

    #[test]
    fn test_delete_removes_task() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        store.add("first")?;
        store.add("second")?;
        store.delete(1)?;

        let tasks = store.load()?;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 2);
        Ok(())
    }

    #[test]
    fn test_delete_missing_id() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        store.add("only")?;
        assert!(matches!(store.delete(9), Err(TaskError::NotFound(9))));
        assert_eq!(store.load()?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_set_status_and_filtered_list() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        store.add("first")?;
        store.add("second")?;
        store.set_status(1, TaskStatus::Done)?;

        let done = store.list(Some(TaskStatus::Done))?;
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, 1);

        let todo = store.list(Some(TaskStatus::Todo))?;
        assert_eq!(todo.len(), 1);
        assert_eq!(todo[0].id, 2);

        assert_eq!(store.list(None)?.len(), 2);
        Ok(())
    }

    #[test]
    fn test_set_status_missing_id() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        let result = store.set_status(5, TaskStatus::InProgress);
        assert!(matches!(result, Err(TaskError::NotFound(5))));
        assert!(!store.path().exists());
        Ok(())
    }

    #[test]
    fn test_list_empty_store() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        assert!(store.list(None)?.is_empty());
        assert!(store.list(Some(TaskStatus::Done))?.is_empty());
        Ok(())
    }

    #[test]
    fn test_save_preserves_insertion_order() -> Result<()> {
        let temp = tempdir()?;
        let store = temp_store(&temp);

        store.add("A")?;
        store.add("B")?;
        store.delete(1)?;
        store.add("C")?;
        store.add("D")?;

        let tasks = store.load()?;
        let descriptions: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["B", "C", "D"]);
        Ok(())
    }
}

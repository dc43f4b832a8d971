use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Task, default_tasks, next_id};

use super::{StoreError, TaskStore};

/// Server-side store: one JSON file holding the full task array.
///
/// Every operation reads the whole file, mutates in memory, and writes the
/// whole file back. There is no locking; concurrent writers race and the
/// last one wins, which is accepted for single-tenant use.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data file with the two default tasks if it doesn't exist.
    pub fn ensure_seeded(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        log::info!("Seeding new data file: {}", self.path.display());
        self.write(&default_tasks())
    }

    fn read(&self) -> Result<Vec<Task>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn write(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl TaskStore for FileStore {
    fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.read()
    }

    fn put(&self, id: Option<u64>, name: &str, description: &str) -> Result<Task, StoreError> {
        let mut tasks = self.read()?;
        let id = id.unwrap_or_else(|| next_id(&tasks));
        let task = Task::new(id, name, description);
        tasks.push(task.clone());
        self.write(&tasks)?;
        Ok(task)
    }

    fn remove(&self, id: u64) -> Result<bool, StoreError> {
        let mut tasks = self.read()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Ok(false);
        }
        self.write(&tasks)?;
        Ok(true)
    }
}

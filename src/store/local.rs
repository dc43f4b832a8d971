use std::fs;
use std::path::PathBuf;

use crate::core::{Task, next_id};

use super::{StoreError, TaskStore};

const TASKS_FILE: &str = "todos.json";
const NEXT_ID_FILE: &str = "next-id";

/// Client-side fallback store: a directory with two independently keyed
/// entries, the serialized task list and the next-id counter. Either entry
/// can be read or written without touching the other, mirroring the two
/// keys the browser client kept in local storage.
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn tasks_path(&self) -> PathBuf {
        self.dir.join(TASKS_FILE)
    }

    fn next_id_path(&self) -> PathBuf {
        self.dir.join(NEXT_ID_FILE)
    }

    /// The persisted task list; empty when never written.
    pub fn read_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let path = self.tasks_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn write_tasks(&self, tasks: &[Task]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let data = serde_json::to_string_pretty(tasks)?;
        fs::write(self.tasks_path(), data)?;
        Ok(())
    }

    /// The persisted counter, if one has been written and parses.
    pub fn read_next_id(&self) -> Result<Option<u64>, StoreError> {
        let path = self.next_id_path();
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        Ok(data.trim().parse().ok())
    }

    pub fn write_next_id(&self, next: u64) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.next_id_path(), next.to_string())?;
        Ok(())
    }
}

impl TaskStore for LocalStore {
    fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.read_tasks()
    }

    fn put(&self, id: Option<u64>, name: &str, description: &str) -> Result<Task, StoreError> {
        let mut tasks = self.read_tasks()?;
        // The stored counter survives deletions of the highest id, so take
        // whichever is larger.
        let counter = self.read_next_id()?.unwrap_or(1).max(next_id(&tasks));
        let id = id.unwrap_or(counter);
        let task = Task::new(id, name, description);
        tasks.push(task.clone());
        self.write_tasks(&tasks)?;
        self.write_next_id(counter.max(id + 1))?;
        Ok(task)
    }

    fn remove(&self, id: u64) -> Result<bool, StoreError> {
        let mut tasks = self.read_tasks()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Ok(false);
        }
        self.write_tasks(&tasks)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::contract;

    #[test]
    fn entries_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        store.write_next_id(5).unwrap();
        assert_eq!(store.read_next_id().unwrap(), Some(5));
        assert!(store.read_tasks().unwrap().is_empty());

        store.write_tasks(&[Task::new(1, "a", "")]).unwrap();
        assert_eq!(store.read_next_id().unwrap(), Some(5));
    }

    #[test]
    fn unwritten_counter_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        assert_eq!(store.read_next_id().unwrap(), None);
    }

    #[test]
    fn garbled_counter_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(dir.path().join(NEXT_ID_FILE), "banana").unwrap();
        assert_eq!(store.read_next_id().unwrap(), None);
    }

    #[test]
    fn counter_survives_deleting_the_highest_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let a = store.put(None, "a", "").unwrap();
        let b = store.put(None, "b", "").unwrap();
        assert!(store.remove(b.id).unwrap());
        let c = store.put(None, "c", "").unwrap();
        assert!(c.id > b.id, "id {} reused after delete", c.id);
        assert_eq!(a.id, 1);
    }

    #[test]
    fn round_trip_reloads_same_tuples() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let tasks = vec![Task::new(1, "a", "x"), Task::new(4, "b", "")];
        store.write_tasks(&tasks).unwrap();
        store.write_next_id(5).unwrap();

        let reloaded = LocalStore::new(dir.path());
        assert_eq!(reloaded.read_tasks().unwrap(), tasks);
        let counter = reloaded.read_next_id().unwrap().unwrap();
        assert!(counter > 4);
    }

    #[test]
    fn contract_assigns_increasing_unique_ids() {
        let dir = tempfile::tempdir().unwrap();
        contract::assigns_increasing_unique_ids(&LocalStore::new(dir.path()));
    }

    #[test]
    fn contract_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        contract::preserves_insertion_order(&LocalStore::new(dir.path()));
    }

    #[test]
    fn contract_remove_of_unknown_id_is_false() {
        let dir = tempfile::tempdir().unwrap();
        contract::remove_of_unknown_id_is_false(&LocalStore::new(dir.path()));
    }

    #[test]
    fn contract_round_trips_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        contract::round_trips_all_fields(&LocalStore::new(dir.path()));
    }
}

pub mod file;
pub mod local;

pub use file::FileStore;
pub use local::LocalStore;

use thiserror::Error;

use crate::core::Task;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt store data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The persistence contract shared by the server's file store and the
/// client's local fallback store.
///
/// Both implementations preserve insertion order across `list` calls and
/// treat a `remove` of an unknown id as `Ok(false)` rather than an error.
/// Every operation is a full read-modify-write of the underlying storage;
/// the last writer wins.
pub trait TaskStore {
    /// All tasks, in insertion order.
    fn list(&self) -> Result<Vec<Task>, StoreError>;

    /// Append a task. When `id` is `None` the store assigns the next id,
    /// strictly greater than every existing id.
    fn put(&self, id: Option<u64>, name: &str, description: &str) -> Result<Task, StoreError>;

    /// Remove the task with `id`. Returns whether it existed.
    fn remove(&self, id: u64) -> Result<bool, StoreError>;
}

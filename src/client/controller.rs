use crate::core::{Task, default_tasks, next_id};
use crate::store::LocalStore;

use super::api::RemoteApi;

/// Where mutations are routed. `Remote` flips to `Local` on the first
/// failed backend call and never flips back within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    Remote,
    Local,
}

/// Owns the in-memory task list, the expanded-item selection, and the
/// routing decision between the remote API and the local fallback store.
///
/// Operations behave identically in both modes; only the persistence path
/// differs. When a remote call fails mid-operation the controller switches
/// to `Local` and completes the same operation against the local store, so
/// the user's add or delete is never lost to an outage.
pub struct SyncController<R> {
    remote: R,
    local: LocalStore,
    tasks: Vec<Task>,
    expanded: Option<usize>,
    next_id: u64,
    mode: BackendMode,
}

impl<R: RemoteApi> SyncController<R> {
    pub fn new(remote: R, local: LocalStore) -> Self {
        Self {
            remote,
            local,
            tasks: Vec::new(),
            expanded: None,
            next_id: 1,
            mode: BackendMode::Remote,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn mode(&self) -> BackendMode {
        self.mode
    }

    #[cfg(test)]
    pub(crate) fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Replace the in-memory list from whichever store is active and clear
    /// the selection. A remote failure here degrades to the local store
    /// within the same call.
    pub async fn load(&mut self) {
        self.expanded = None;
        if self.mode == BackendMode::Remote {
            match self.remote.fetch().await {
                Ok(tasks) => {
                    self.next_id = next_id(&tasks);
                    self.tasks = tasks;
                    return;
                }
                Err(e) => self.go_local(&e),
            }
        }
        self.load_local();
    }

    /// Add a task. A trimmed-empty name is a no-op; returns whether a task
    /// was created.
    pub async fn add(&mut self, name: &str, description: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let description = description.trim();

        if self.mode == BackendMode::Remote {
            match self.remote.create(name, description).await {
                Ok(task) => {
                    log::debug!("Created remotely: #{} {}", task.id, task.name);
                    // Full resync rather than an optimistic append; load()
                    // also clears the selection.
                    self.load().await;
                    return true;
                }
                Err(e) => self.go_local(&e),
            }
        }

        let task = Task::new(self.next_id, name, description);
        self.next_id += 1;
        self.tasks.push(task);
        self.expanded = None;
        self.persist_local();
        true
    }

    /// Delete by id. Unknown ids are a no-op in either mode; returns
    /// whether a task was removed.
    pub async fn delete(&mut self, id: u64) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };

        if self.mode == BackendMode::Remote {
            match self.remote.delete(id).await {
                Ok(()) => {
                    self.tasks.remove(index);
                    self.repair_selection(index);
                    self.resync_after_delete().await;
                    return true;
                }
                Err(e) => self.go_local(&e),
            }
        }

        self.tasks.remove(index);
        self.repair_selection(index);
        self.persist_local();
        true
    }

    /// Expand the item at `index`, or collapse it if it is already
    /// expanded. Out-of-range indices are ignored. No I/O.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.tasks.len() {
            return;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    fn go_local(&mut self, err: &str) {
        log::warn!("Backend unavailable, switching to local store: {}", err);
        self.mode = BackendMode::Local;
    }

    /// Read the local store, seeding the default list when it is empty or
    /// unreadable. The counter never goes below one past the highest id.
    fn load_local(&mut self) {
        let mut tasks = match self.local.read_tasks() {
            Ok(tasks) => tasks,
            Err(e) => {
                log::warn!("Local store unreadable: {}", e);
                Vec::new()
            }
        };
        if tasks.is_empty() {
            tasks = default_tasks();
            if let Err(e) = self.local.write_tasks(&tasks) {
                log::warn!("Failed to persist seed tasks: {}", e);
            }
        }
        let counter = self.local.read_next_id().ok().flatten().unwrap_or(1);
        self.next_id = counter.max(next_id(&tasks));
        self.tasks = tasks;
    }

    /// After a successful remote delete, refetch for a consistent view but
    /// keep the already-repaired selection. A failure here degrades to
    /// local mode with the in-memory list, which is already correct.
    async fn resync_after_delete(&mut self) {
        match self.remote.fetch().await {
            Ok(tasks) => {
                self.next_id = next_id(&tasks);
                self.tasks = tasks;
                if self.expanded.is_some_and(|i| i >= self.tasks.len()) {
                    self.expanded = None;
                }
            }
            Err(e) => {
                self.go_local(&e);
                self.persist_local();
            }
        }
    }

    /// Index-repair rule: selection on the removed item clears; selection
    /// past it shifts down by one.
    fn repair_selection(&mut self, removed_index: usize) {
        self.expanded = match self.expanded {
            Some(i) if i == removed_index => None,
            Some(i) if i > removed_index => Some(i - 1),
            other => other,
        };
    }

    /// Write both local entries. Failures are logged and the in-memory
    /// list stays authoritative for the rest of the session.
    fn persist_local(&mut self) {
        if let Err(e) = self.local.write_tasks(&self.tasks) {
            log::warn!("Failed to write local task list, continuing in memory: {}", e);
        }
        if let Err(e) = self.local.write_next_id(self.next_id) {
            log::warn!("Failed to write local id counter, continuing in memory: {}", e);
        }
    }
}

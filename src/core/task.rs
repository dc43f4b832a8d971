use serde::{Deserialize, Serialize};

/// A single todo item. Ids are assigned by whichever store the task was
/// created against and are unique within that store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Task {
    pub fn new(id: u64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into().trim().to_string(),
            description: description.into().trim().to_string(),
        }
    }
}

/// The id the next created task should get: strictly greater than every
/// existing id, starting at 1 for an empty list.
pub fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}

/// The two seed tasks a fresh store starts with.
pub fn default_tasks() -> Vec<Task> {
    vec![Task::new(1, "todo 1", ""), Task::new(2, "todo 2", "")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_empty_list_starts_at_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn next_id_exceeds_every_existing_id() {
        let tasks = vec![Task::new(3, "a", ""), Task::new(7, "b", ""), Task::new(2, "c", "")];
        assert_eq!(next_id(&tasks), 8);
    }

    #[test]
    fn new_trims_name_and_description() {
        let t = Task::new(1, "  buy milk  ", " 2% \n");
        assert_eq!(t.name, "buy milk");
        assert_eq!(t.description, "2%");
    }

    #[test]
    fn default_tasks_have_ids_one_and_two() {
        let seed = default_tasks();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].id, 1);
        assert_eq!(seed[0].name, "todo 1");
        assert_eq!(seed[1].id, 2);
        assert!(seed[1].description.is_empty());
    }
}

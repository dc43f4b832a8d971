pub mod task;

pub use task::{Task, default_tasks, next_id};

use crate::core::Task;

/// Project the task list and selection into display lines: one line per
/// task, plus an indented description line under the expanded item. Pure
/// and stateless, safe to call after every mutation.
pub fn render_lines(tasks: &[Task], expanded: Option<usize>) -> Vec<String> {
    let mut lines = Vec::with_capacity(tasks.len() + 1);
    for (index, task) in tasks.iter().enumerate() {
        lines.push(format!("{:>2}. {}  (#{})", index, task.name, task.id));
        if expanded == Some(index) {
            lines.push(format!("      {}", task.description));
        }
    }
    lines
}

use crate::domain::task::Task;

/// One line per task: `[id] description - status priority`.
pub fn render(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&line(task));
        out.push('\n');
    }
    out
}

pub fn line(task: &Task) -> String {
    format!(
        "[{}] {} - {} {}",
        task.id, task.description, task.status, task.priority
    )
}

use std::cmp::Reverse;

use crate::domain::task::{Status, Task};

/// Tasks matching `filter`, highest priority first. Equal priorities keep
/// their stored order.
pub fn by_priority<'a>(tasks: &'a [Task], filter: Option<Status>) -> Vec<&'a Task> {
    let mut out: Vec<&Task> = tasks
        .iter()
        .filter(|t| filter.is_none_or(|s| t.status == s))
        .collect();
    out.sort_by_key(|t| Reverse(t.priority));
    out
}

pub fn matching<'a>(tasks: &'a [Task], text: &str) -> Vec<&'a Task> {
    let needle = text.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.description.to_lowercase().contains(&needle))
        .collect()
}

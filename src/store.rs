use std::fs;
use std::path::Path;

use time::Date;
use tracing::{debug, info, warn};

use crate::domain::task::{Priority, Status, Task, TaskId};
use crate::error::{Result, TaskError};
use crate::repo::TaskRepository;
use crate::usecase::{query, report};

/// Owns the task collection and persists it through `R` after every change.
///
/// A mutation whose save fails is rolled back, so memory never runs ahead of
/// what the repository accepted.
pub struct TaskStore<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
    load_error: Option<TaskError>,
}

impl<R: TaskRepository> TaskStore<R> {
    pub fn open(repo: R) -> Self {
        let mut store = Self {
            repo,
            tasks: Vec::new(),
            load_error: None,
        };
        store.load();
        store
    }

    /// Replaces memory with what the repository holds. On failure the store
    /// falls back to an empty collection and remembers the error.
    pub fn load(&mut self) {
        match self.repo.load() {
            Ok(tasks) => {
                self.tasks = tasks;
                self.load_error = None;
            }
            Err(err) => {
                warn!(error = %err, "failed to load tasks, starting empty");
                self.tasks.clear();
                self.load_error = Some(err);
            }
        }
    }

    pub fn load_error(&self) -> Option<&TaskError> {
        self.load_error.as_ref()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn save(&mut self) -> Result<()> {
        self.repo.save(&self.tasks)
    }

    pub fn add(
        &mut self,
        description: &str,
        priority: Priority,
        due_date: Option<Date>,
    ) -> Result<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let task = Task::new(description, priority, due_date);
        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;

        info!(id = %task.id, priority = %task.priority, "task added");
        Ok(task)
    }

    pub fn update(&mut self, id: TaskId, status: Status) -> Result<Task> {
        let pos = self.position(id)?;
        let mut next = self.tasks.clone();
        next[pos].status = status;
        let updated = next[pos].clone();
        self.commit(next)?;

        info!(%id, %status, "task status updated");
        Ok(updated)
    }

    pub fn remove(&mut self, id: TaskId) -> Result<Task> {
        let pos = self.position(id)?;
        let mut next = self.tasks.clone();
        let removed = next.remove(pos);
        self.commit(next)?;

        info!(%id, "task removed");
        Ok(removed)
    }

    pub fn list(&self, filter: Option<Status>) -> Vec<&Task> {
        query::by_priority(&self.tasks, filter)
    }

    pub fn search(&self, text: &str) -> Vec<&Task> {
        query::matching(&self.tasks, text)
    }

    /// Writes the line report to `path`, replacing any previous export.
    pub fn export(&self, path: &Path) -> Result<usize> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| TaskError::io(parent, e))?;
        }
        fs::write(path, report::render(&self.tasks)).map_err(|e| TaskError::io(path, e))?;

        debug!(path = %path.display(), count = self.tasks.len(), "exported tasks");
        Ok(self.tasks.len())
    }

    fn position(&self, id: TaskId) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    fn commit(&mut self, next: Vec<Task>) -> Result<()> {
        let previous = std::mem::replace(&mut self.tasks, next);
        if let Err(err) = self.save() {
            self.tasks = previous;
            return Err(err);
        }
        Ok(())
    }
}

use crate::domain::task::Task;
use crate::error::Result;

pub mod json;
pub mod memory;

/// Whole-collection persistence. Every save replaces what was stored before.
pub trait TaskRepository {
    fn load(&mut self) -> Result<Vec<Task>>;
    fn save(&mut self, tasks: &[Task]) -> Result<()>;
}

impl<R: TaskRepository + ?Sized> TaskRepository for Box<R> {
    fn load(&mut self) -> Result<Vec<Task>> {
        (**self).load()
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        (**self).save(tasks)
    }
}

use super::TaskRepository;
use crate::domain::task::Task;
use crate::error::Result;

#[derive(Default)]
pub struct InMemoryTaskRepo {
    items: Vec<Task>,
}

impl InMemoryTaskRepo {
    pub fn with_seed(seed: impl IntoIterator<Item = Task>) -> Self {
        let mut repo = Self::default();
        repo.items.extend(seed);
        repo
    }
}

impl TaskRepository for InMemoryTaskRepo {
    fn load(&mut self) -> Result<Vec<Task>> {
        Ok(self.items.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        self.items = tasks.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::Priority;

    #[test]
    fn save_replaces_contents() {
        let mut repo = InMemoryTaskRepo::with_seed([Task::new("old", Priority::Low, None)]);
        let fresh = vec![Task::new("new", Priority::High, None)];

        repo.save(&fresh).unwrap();

        assert_eq!(repo.load().unwrap(), fresh);
    }
}

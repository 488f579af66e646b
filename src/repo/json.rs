use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::TaskRepository;
use crate::domain::task::Task;
use crate::error::{Result, TaskError};

/// Stores the collection as a pretty-printed JSON array in a single file.
pub struct JsonTaskRepo {
    path: PathBuf,
}

impl JsonTaskRepo {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn ensure_file(&self) -> Result<()> {
        match fs::metadata(&self.path) {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "initializing empty task file");
                self.write(&[])
            }
            Err(err) => Err(TaskError::io(&self.path, err)),
        }
    }

    fn write(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| TaskError::io(parent, e))?;
        }
        let body = serde_json::to_string_pretty(tasks)
            .map_err(|e| TaskError::malformed(&self.path, e))?;
        fs::write(&self.path, body).map_err(|e| TaskError::io(&self.path, e))
    }
}

impl TaskRepository for JsonTaskRepo {
    fn load(&mut self) -> Result<Vec<Task>> {
        self.ensure_file()?;
        let data = fs::read_to_string(&self.path).map_err(|e| TaskError::io(&self.path, e))?;
        let tasks: Vec<Task> =
            serde_json::from_str(&data).map_err(|e| TaskError::malformed(&self.path, e))?;

        let mut seen = HashSet::with_capacity(tasks.len());
        if let Some(dup) = tasks.iter().find(|t| !seen.insert(t.id)) {
            return Err(TaskError::malformed(
                &self.path,
                format!("duplicate task id {}", dup.id),
            ));
        }

        debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        self.write(tasks)?;
        debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_NAME: &str = "taskmate";
const FILE_ENV: &str = "TASKMATE_FILE";
const EXPORT_ENV: &str = "TASKMATE_EXPORT";
const EXPORT_FILE_NAME: &str = "tasks.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    File,
    Memory,
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub export_file: PathBuf,
    pub backend: Backend,
}

/// Command-line overrides; anything left unset falls back to the
/// environment and then to the OS data directory.
#[derive(Debug, Default)]
pub struct Overrides {
    pub file: Option<PathBuf>,
    pub export: Option<PathBuf>,
    pub memory: bool,
    pub demo: bool,
}

impl Config {
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        Self::resolve_with(overrides, |key| std::env::var(key).ok())
    }

    fn resolve_with(overrides: Overrides, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let from_env = |key: &str| env(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);

        let data_file = match overrides.file.or_else(|| from_env(FILE_ENV)) {
            Some(path) => path,
            None => default_data_file()?,
        };
        let export_file = overrides
            .export
            .or_else(|| from_env(EXPORT_ENV))
            .unwrap_or_else(|| data_file.with_file_name(EXPORT_FILE_NAME));

        let backend = if overrides.demo {
            Backend::Demo
        } else if overrides.memory {
            Backend::Memory
        } else {
            Backend::File
        };

        Ok(Self {
            data_file,
            export_file,
            backend,
        })
    }
}

fn default_data_file() -> Result<PathBuf> {
    let base = dirs::data_dir().context("failed to resolve data dir")?;
    Ok(base.join(APP_NAME).join("tasks.json"))
}

mod config;
mod domain;
mod error;
mod repo;
mod store;
mod ui;
mod usecase;

use std::io::{stdin, stdout};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use config::{Backend, Config, Overrides};
use domain::task::{Priority, Task};
use repo::TaskRepository;
use repo::json::JsonTaskRepo;
use repo::memory::InMemoryTaskRepo;
use store::TaskStore;

#[derive(Parser, Debug)]
#[command(author, version, about = "taskmate - personal task tracker", long_about = None)]
struct Args {
    /// Path to the JSON task file (env TASKMATE_FILE; default: OS data dir)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Path of the exported text report (env TASKMATE_EXPORT; default: next to the task file)
    #[arg(long)]
    export: Option<PathBuf>,

    /// Keep tasks in memory only
    #[arg(long, default_value_t = false)]
    memory: bool,

    /// Start with demo tasks, kept in memory
    #[arg(long, default_value_t = false)]
    demo: bool,
}

fn main() -> Result<()> {
    // Quiet by default so log lines don't interleave with prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = Config::resolve(Overrides {
        file: args.file,
        export: args.export,
        memory: args.memory,
        demo: args.demo,
    })?;
    debug!(?cfg, "resolved configuration");

    let repo: Box<dyn TaskRepository> = match cfg.backend {
        Backend::Demo => Box::new(InMemoryTaskRepo::with_seed(seed_tasks())),
        Backend::Memory => Box::new(InMemoryTaskRepo::default()),
        Backend::File => Box::new(JsonTaskRepo::open(&cfg.data_file)),
    };

    let mut store = TaskStore::open(repo);
    ui::run(&mut store, &cfg.export_file, stdin().lock(), stdout())
}

fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new("Write documentation", Priority::Medium, None),
        Task::new("Check PRs waiting for review", Priority::High, None),
        Task::new("Draft release notes", Priority::Low, None),
    ]
}

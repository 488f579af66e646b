mod action;
mod prompt;

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use crossterm::style::{StyledContent, Stylize};

use crate::domain::task::{Priority, Status, Task, parse_due_date, parse_task_id};
use crate::error::TaskError;
use crate::repo::TaskRepository;
use crate::store::TaskStore;

use action::Action;
use prompt::Prompter;

const LOAD_FAILURE_NOTICE: &str =
    "Starting with an empty list; the next change will overwrite the task file.";

/// Runs the menu until the user picks Exit or input runs out.
pub fn run<R, I, W>(store: &mut TaskStore<R>, export_path: &Path, input: I, out: W) -> Result<()>
where
    R: TaskRepository,
    I: BufRead,
    W: Write,
{
    let mut p = Prompter::new(input, out);

    if let Some(err) = store.load_error() {
        writeln!(p.out, "{}", error_line(err))?;
        writeln!(p.out, "{}", LOAD_FAILURE_NOTICE.red())?;
    }

    loop {
        print_menu(&mut p.out)?;
        let Some(choice) = p.ask("What do you want to do?")? else {
            break;
        };
        let Some(action) = Action::parse(&choice) else {
            writeln!(p.out, "{}", format!("Unknown choice: {}", choice.trim()).red())?;
            continue;
        };
        if action == Action::Exit {
            break;
        }
        if !dispatch(store, export_path, &mut p, action)? {
            break;
        }
    }

    writeln!(p.out, "Bye!")?;
    Ok(())
}

fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    for (idx, action) in Action::ALL.iter().enumerate() {
        writeln!(out, "  {}) {}", idx + 1, action.label())?;
    }
    Ok(())
}

/// Returns `false` when input ended in the middle of an action.
fn dispatch<R, I, W>(
    store: &mut TaskStore<R>,
    export_path: &Path,
    p: &mut Prompter<I, W>,
    action: Action,
) -> Result<bool>
where
    R: TaskRepository,
    I: BufRead,
    W: Write,
{
    match action {
        Action::Add => {
            let Some(description) = p.ask("Description")? else {
                return Ok(false);
            };
            let Some(priority) = p.ask("Priority (low/medium/high) [medium]")? else {
                return Ok(false);
            };
            let Some(due) = p.ask("Due date (YYYY-MM-DD, optional)")? else {
                return Ok(false);
            };
            let outcome = parse_priority(&priority)
                .and_then(|priority| Ok((priority, parse_due_date(&due)?)))
                .and_then(|(priority, due)| store.add(&description, priority, due));
            match outcome {
                Ok(task) => writeln!(
                    p.out,
                    "{}",
                    format!("Task added: \"{}\" ({})", task.description, task.id).green()
                )?,
                Err(err) => writeln!(p.out, "{}", error_line(&err))?,
            }
        }
        Action::List => {
            let Some(filter) = p.ask("Filter by status (all/pending/in progress/completed) [all]")?
            else {
                return Ok(false);
            };
            match parse_filter(&filter) {
                Ok(filter) => print_tasks(&mut p.out, "Task List:", &store.list(filter))?,
                Err(err) => writeln!(p.out, "{}", error_line(&err))?,
            }
        }
        Action::Update => {
            let Some(id) = p.ask("Task id")? else {
                return Ok(false);
            };
            let Some(status) = p.ask("New status (pending/in progress/completed)")? else {
                return Ok(false);
            };
            let outcome = status
                .parse::<Status>()
                .and_then(|status| store.update(parse_task_id(&id)?, status));
            match outcome {
                Ok(task) => writeln!(
                    p.out,
                    "{}",
                    format!("Task {} is now {}", task.id, task.status).blue()
                )?,
                Err(err) => writeln!(p.out, "{}", error_line(&err))?,
            }
        }
        Action::Remove => {
            let Some(id) = p.ask("Task id to remove")? else {
                return Ok(false);
            };
            match parse_task_id(&id).and_then(|id| store.remove(id)) {
                Ok(task) => writeln!(p.out, "{}", format!("Task {} removed", task.id).yellow())?,
                Err(err) => writeln!(p.out, "{}", error_line(&err))?,
            }
        }
        Action::Search => {
            let Some(text) = p.ask("Text to search for")? else {
                return Ok(false);
            };
            print_tasks(&mut p.out, "Search results:", &store.search(&text))?;
        }
        Action::Export => match store.export(export_path) {
            Ok(count) => writeln!(
                p.out,
                "{}",
                format!("Exported {count} task(s) to {}", export_path.display()).green()
            )?,
            Err(err) => writeln!(p.out, "{}", error_line(&err))?,
        },
        Action::Exit => return Ok(false),
    }
    Ok(true)
}

fn parse_priority(raw: &str) -> Result<Priority, TaskError> {
    if raw.trim().is_empty() {
        return Ok(Priority::default());
    }
    raw.parse()
}

fn parse_filter(raw: &str) -> Result<Option<Status>, TaskError> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    raw.parse().map(Some)
}

fn print_tasks<W: Write>(out: &mut W, title: &str, tasks: &[&Task]) -> Result<()> {
    if tasks.is_empty() {
        writeln!(out, "{}", "No tasks found!".dark_grey())?;
        return Ok(());
    }
    writeln!(out, "\n{}", title.magenta())?;
    for task in tasks {
        let due = task
            .due_date_label()
            .map(|d| format!(" (due {d})"))
            .unwrap_or_default();
        writeln!(
            out,
            "{} {} - {} {}{}",
            task.id.to_string().cyan(),
            task.description,
            status_styled(task.status),
            task.priority,
            due
        )?;
    }
    Ok(())
}

fn status_styled(status: Status) -> StyledContent<&'static str> {
    match status {
        Status::Completed => status.as_str().green(),
        Status::InProgress => status.as_str().yellow(),
        Status::Pending => status.as_str().red(),
    }
}

fn error_line(err: &TaskError) -> StyledContent<String> {
    format!("Error ({}): {err}", err.kind().label()).red()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::repo::json::JsonTaskRepo;
    use crate::repo::memory::InMemoryTaskRepo;

    fn run_script(store: &mut TaskStore<InMemoryTaskRepo>, export: &Path, script: &str) -> String {
        let mut out = Vec::new();
        run(store, export, Cursor::new(script.to_string()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn store() -> TaskStore<InMemoryTaskRepo> {
        TaskStore::open(InMemoryTaskRepo::default())
    }

    #[test]
    fn add_then_exit() {
        let mut store = store();
        let out = run_script(&mut store, Path::new("unused.txt"), "1\nBuy milk\nhigh\n\n7\n");

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].priority, Priority::High);
        assert!(out.contains("Task added: \"Buy milk\""));
        assert!(out.contains("Bye!"));
    }

    #[test]
    fn empty_description_reports_validation() {
        let mut store = store();
        let out = run_script(&mut store, Path::new("unused.txt"), "add\n\n\n\nexit\n");

        assert!(store.tasks().is_empty());
        assert!(out.contains("validation error"));
    }

    #[test]
    fn bad_due_date_is_rejected() {
        let mut store = store();
        let out = run_script(&mut store, Path::new("unused.txt"), "1\nPay rent\nlow\ntomorrow\n7\n");

        assert!(store.tasks().is_empty());
        assert!(out.contains("invalid due date"));
    }

    #[test]
    fn update_by_label_and_unknown_id() {
        let mut store = store();
        let task = store.add("Buy milk", Priority::Medium, None).unwrap();
        let script = format!("Update task\n{}\ncompleted\nupdate\nnope\npending\n7\n", task.id);

        let out = run_script(&mut store, Path::new("unused.txt"), &script);

        assert_eq!(store.tasks()[0].status, Status::Completed);
        assert!(out.contains("is now completed"));
        assert!(out.contains("not found"));
    }

    #[test]
    fn invalid_status_is_a_validation_error() {
        let mut store = store();
        let task = store.add("Buy milk", Priority::Medium, None).unwrap();
        let script = format!("3\n{}\ndone\n7\n", task.id);

        let out = run_script(&mut store, Path::new("unused.txt"), &script);

        assert_eq!(store.tasks()[0].status, Status::Pending);
        assert!(out.contains("validation error"));
    }

    #[test]
    fn list_search_and_remove() {
        let mut store = store();
        let milk = store.add("Buy MILK", Priority::Low, None).unwrap();
        store.add("Pay rent", Priority::High, None).unwrap();
        let script = format!("2\n\n5\nmilk\n4\n{}\n5\nmilk\n7\n", milk.id);

        let out = run_script(&mut store, Path::new("unused.txt"), &script);

        assert!(out.contains("Task List:"));
        let rent = out.find("Pay rent").unwrap();
        let buy = out.find("Buy MILK").unwrap();
        assert!(rent < buy);
        assert!(out.contains("removed"));
        assert!(out.contains("No tasks found!"));
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn export_writes_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let export = dir.path().join("tasks.txt");
        let mut store = store();
        store.add("Buy milk", Priority::High, None).unwrap();

        let out = run_script(&mut store, &export, "export\n7\n");

        assert!(out.contains("Exported 1 task(s)"));
        let body = std::fs::read_to_string(&export).unwrap();
        assert!(body.ends_with("Buy milk - pending high\n"));
    }

    #[test]
    fn load_failure_warns_about_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "not json").unwrap();
        let mut store = TaskStore::open(JsonTaskRepo::open(&path));

        let mut out = Vec::new();
        run(&mut store, Path::new("unused.txt"), Cursor::new("7\n"), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("I/O error"));
        assert!(out.contains("next change will overwrite"));
    }

    #[test]
    fn unknown_choice_and_eof() {
        let mut store = store();
        let out = run_script(&mut store, Path::new("unused.txt"), "dance\n");

        assert!(out.contains("Unknown choice: dance"));
        assert!(out.contains("Bye!"));
    }

    #[test]
    fn eof_mid_action_exits_without_changes() {
        let mut store = store();
        let out = run_script(&mut store, Path::new("unused.txt"), "1\nBuy milk\n");

        assert!(store.tasks().is_empty());
        assert!(out.contains("Bye!"));
    }
}

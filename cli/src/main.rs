mod notify;
mod table;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use tasktrack_core::{FileTaskRepository, Status, TaskService};

use crate::notify::{ConsoleNotifier, Notifier};

#[derive(Parser)]
#[command(name = "tasktrack")]
#[command(about = "A local JSON-backed task tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add { description: String },
    /// Replace the description of an existing task
    Update { id: u32, description: String },
    /// Delete a task (remaining tasks are renumbered to 1..N)
    Delete { id: u32 },
    /// Mark a task as completed
    MarkCompleted { id: u32 },
    /// Mark a task as in-progress
    MarkInProgress { id: u32 },
    /// List tasks, optionally filtered by status
    List {
        #[arg(value_enum, default_value_t = Filter::All)]
        filter: Filter,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Filter {
    All,
    Completed,
    InProgress,
}

impl Filter {
    fn status(self) -> Option<Status> {
        match self {
            Filter::All => None,
            Filter::Completed => Some(Status::Completed),
            Filter::InProgress => Some(Status::InProgress),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let repo = FileTaskRepository::new(None)?;
    let service = TaskService::new(repo);
    let notifier = ConsoleNotifier;

    match cli.command {
        Some(Commands::Add { description }) => {
            let task = service.add(description)?;
            notifier.confirm(&format!("Task {} added successfully.", task.id));
        }
        Some(Commands::Update { id, description }) => match service.update(id, description)? {
            Some(task) => notifier.confirm(&format!("Task {} updated successfully.", task.id)),
            None => notifier.confirm("Task not found."),
        },
        Some(Commands::Delete { id }) => match service.delete(id)? {
            Some(task) => notifier.confirm(&format!("Task {} deleted successfully.", task.id)),
            None => notifier.confirm("Task not found."),
        },
        Some(Commands::MarkCompleted { id }) => match service.mark(id, Status::Completed)? {
            Some(task) => notifier.confirm(&format!("Task {} marked as completed.", task.id)),
            None => notifier.confirm("Task not found."),
        },
        Some(Commands::MarkInProgress { id }) => match service.mark(id, Status::InProgress)? {
            Some(task) => notifier.confirm(&format!("Task {} marked as in-progress.", task.id)),
            None => notifier.confirm("Task not found."),
        },
        Some(Commands::List { filter }) => {
            let status = filter.status();
            let tasks = service.list(status)?;
            if tasks.is_empty() {
                match status {
                    Some(s) => println!("No {} tasks found.", s),
                    None => println!("No tasks found."),
                }
            } else {
                println!("{}", table::render(&tasks));
            }
        }
        None => {
            Cli::command().print_help()?;
        }
    }
    Ok(())
}

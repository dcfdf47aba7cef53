use crate::model::task::{Status, Task};
use crate::repository::TaskRepository;
use crate::time::today;
use anyhow::Result;

/// CRUD over the task store. Every call loads the full store, applies one
/// operation, and (for mutations) writes the full store back; there is no
/// long-lived in-memory state.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a task with id = max(existing ids) + 1, appends it and
    /// persists the store.
    pub fn add(&self, description: String) -> Result<Task> {
        let mut tasks = self.repo.load()?;
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task::new(next_id, description);
        tasks.push(task.clone());
        self.repo.save(&tasks)?;
        Ok(task)
    }

    /// Replaces the description of the task with the given id. Returns
    /// `None` when no task matches; the unchanged store is still written
    /// back.
    pub fn update(&self, id: u32, description: String) -> Result<Option<Task>> {
        let mut tasks = self.repo.load()?;
        let updated = match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.description = description;
                task.updated_at = today();
                Some(task.clone())
            }
            None => None,
        };
        self.repo.save(&tasks)?;
        Ok(updated)
    }

    /// Removes the task with the given id and renumbers the remaining
    /// tasks to 1..N in their current order. The returned copy keeps the
    /// id it had before renumbering.
    pub fn delete(&self, id: u32) -> Result<Option<Task>> {
        let mut tasks = self.repo.load()?;
        let removed = tasks
            .iter()
            .position(|t| t.id == id)
            .map(|pos| tasks.remove(pos));
        if removed.is_some() {
            for (i, task) in tasks.iter_mut().enumerate() {
                task.id = i as u32 + 1;
            }
        }
        self.repo.save(&tasks)?;
        Ok(removed)
    }

    /// Sets the status of the task with the given id. Any status may be
    /// set from any other; no transition ordering is enforced.
    pub fn mark(&self, id: u32, status: Status) -> Result<Option<Task>> {
        let mut tasks = self.repo.load()?;
        let marked = match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = status;
                task.updated_at = today();
                Some(task.clone())
            }
            None => None,
        };
        self.repo.save(&tasks)?;
        Ok(marked)
    }

    /// Returns tasks in store order, optionally filtered by status.
    /// Read-only: never writes the store back.
    pub fn list(&self, filter: Option<Status>) -> Result<Vec<Task>> {
        let tasks = self.repo.load()?;
        Ok(match filter {
            Some(status) => tasks.into_iter().filter(|t| t.status == status).collect(),
            None => tasks,
        })
    }
}

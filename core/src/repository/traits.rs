use crate::model::task::Task;
use anyhow::Result;

/// Persistence seam for the task store. The store is a single ordered
/// sequence, loaded and saved in its entirety; there is no per-task
/// persistence.
pub trait TaskRepository {
    fn load(&self) -> Result<Vec<Task>>;
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use model::task::{Status, Task};
pub use repository::{FileTaskRepository, TaskRepository};
pub use service::task_service::TaskService;
pub use time::today;

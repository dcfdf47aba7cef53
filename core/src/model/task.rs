use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::today;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Completed,
}

impl Default for Status {
    fn default() -> Self {
        Status::Todo
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Completed => "completed",
        };
        write!(f, "{}", label)
    }
}

// Ids are positional, not stable handles: deleting any task renumbers the
// remaining ones to 1..N, so an id only identifies a task against the
// store's current contents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub status: Status,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Task {
    pub fn new(id: u32, description: String) -> Self {
        let date = today();
        Self {
            id,
            description,
            status: Status::default(),
            created_at: date,
            updated_at: date,
        }
    }
}

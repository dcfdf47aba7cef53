use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tasktrack_core::Task;

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created At")]
    created_at: String,
    #[tabled(rename = "Updated At")]
    updated_at: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            description: task.description.clone(),
            status: task.status.to_string(),
            created_at: format_date(task.created_at),
            updated_at: format_date(task.updated_at),
        }
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn render(tasks: &[Task]) -> String {
    let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from).collect();
    Table::new(rows).with(Style::ascii()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasktrack_core::Status;

    #[test]
    fn render_includes_headers_and_task_fields() {
        let mut task = Task::new(1, "buy milk".to_string());
        task.status = Status::InProgress;

        let table = render(&[task]);

        for header in ["ID", "Description", "Status", "Created At", "Updated At"] {
            assert!(table.contains(header), "missing header {header}");
        }
        assert!(table.contains("buy milk"));
        assert!(table.contains("in-progress"));
    }

    #[test]
    fn render_lists_tasks_in_given_order() {
        let first = Task::new(1, "first".to_string());
        let second = Task::new(2, "second".to_string());

        let table = render(&[first, second]);

        let first_pos = table.find("first").unwrap();
        let second_pos = table.find("second").unwrap();
        assert!(first_pos < second_pos);
    }
}

use chrono::{Local, NaiveDate};

/// The store timestamps tasks with calendar dates, not datetimes.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

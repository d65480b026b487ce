pub mod calendar;
pub mod dashboard;
pub mod my_tasks;
pub mod signed_out;

pub mod color;
pub mod family;
pub mod quick_task;
pub mod task;

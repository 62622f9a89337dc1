mod list;
mod models;

pub use list::TaskList;
pub use models::{Task, TaskStatus};

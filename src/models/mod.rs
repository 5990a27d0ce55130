pub mod task;
pub mod user;

pub use task::{Task, TaskInput, TaskResponse, TaskStatus, TaskUpdate};
pub use user::User;

//! Request-independent application logic sitting between the routes and the store.

pub mod auth;
pub mod tasks;

pub use auth::AuthService;
pub use tasks::TaskService;

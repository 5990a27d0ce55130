#![doc = "The `tasklane` library crate."]
#![doc = ""]
#![doc = "A multi-user to-do list service: accounts, per-user task lists with an"]
#![doc = "archive, cookie sessions, and an in-memory store behind one lock."]
#![doc = "The binary (`main.rs`) wires these modules into an actix-web server."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use crate::error::AppError;
pub use crate::state::AppState;
pub use crate::store::MemoryStore;

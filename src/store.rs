//! In-memory account and task repository.
//!
//! One `RwLock` guards the whole store. Lookups and listings share the read
//! side; registration and every task mutation take the write side. Each
//! operation is atomic under that lock, so there are no partial writes.
//!
//! Task ids come from one counter shared by every user, so no two tasks ever
//! carry the same id. Lookups still only search the caller's own list.

use chrono::Utc;
use log::{debug, info};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Task, TaskInput, TaskUpdate, User};

/// Failures surfaced by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    AccountExists,
    InvalidCredentials,
    TaskNotFound,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::AccountExists => write!(f, "account already exists"),
            StoreError::InvalidCredentials => write!(f, "invalid user id or secret"),
            StoreError::TaskNotFound => write!(f, "task not found"),
        }
    }
}

impl std::error::Error for StoreError {}

pub type StoreResult<T> = Result<T, StoreError>;

/// Point-in-time counts, reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub accounts: usize,
    pub tasks: usize,
}

/// One user's tasks in insertion order.
#[derive(Debug, Default)]
struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    fn find_mut(&mut self, id: i64) -> StoreResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound)
    }
}

#[derive(Debug)]
struct Inner {
    accounts: HashMap<String, User>,
    tasks: HashMap<String, TaskList>,
    next_task_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            accounts: HashMap::new(),
            tasks: HashMap::new(),
            next_task_id: 1,
        }
    }
}

impl Inner {
    fn list_mut(&mut self, username: &str) -> StoreResult<&mut TaskList> {
        self.tasks.get_mut(username).ok_or(StoreError::TaskNotFound)
    }

    fn filtered(&self, username: &str, keep: impl Fn(&Task) -> bool) -> Vec<Task> {
        self.tasks
            .get(username)
            .map(|list| list.tasks.iter().filter(|t| keep(*t)).cloned().collect())
            .unwrap_or_default()
    }
}

/// Shared handle to the in-memory store. Clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an account whose password is already hashed.
    pub async fn register(&self, user: User) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if inner.accounts.contains_key(&user.username) {
            return Err(StoreError::AccountExists);
        }
        info!("registered account {}", user.username);
        inner.accounts.insert(user.username.clone(), user);
        Ok(())
    }

    pub async fn stats(&self) -> StoreStats {
        let inner = self.inner.read().await;
        StoreStats {
            accounts: inner.accounts.len(),
            tasks: inner.tasks.values().map(|list| list.tasks.len()).sum(),
        }
    }

    pub async fn get_user(&self, username: &str) -> StoreResult<User> {
        let inner = self.inner.read().await;
        inner
            .accounts
            .get(username)
            .cloned()
            .ok_or(StoreError::InvalidCredentials)
    }

    /// Appends a new active task for `username` and returns its id.
    pub async fn add_task(&self, username: &str, input: TaskInput) -> StoreResult<i64> {
        let mut inner = self.inner.write().await;
        if !inner.accounts.contains_key(username) {
            return Err(StoreError::InvalidCredentials);
        }

        let id = inner.next_task_id;
        inner.next_task_id += 1;
        inner
            .tasks
            .entry(username.to_string())
            .or_default()
            .tasks
            .push(Task::new(id, username, input, Utc::now()));

        debug!("user {} added task {}", username, id);
        Ok(id)
    }

    /// Tasks that are neither resolved nor archived, in insertion order.
    pub async fn active_tasks(&self, username: &str) -> StoreResult<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.filtered(username, Task::is_active))
    }

    /// Resolved or deleted tasks, in insertion order.
    pub async fn archived_tasks(&self, username: &str) -> StoreResult<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.filtered(username, Task::is_archived))
    }

    pub async fn task_by_id(&self, username: &str, id: i64) -> StoreResult<Task> {
        let inner = self.inner.read().await;
        inner
            .tasks
            .get(username)
            .and_then(|list| list.tasks.iter().find(|t| t.id == id))
            .cloned()
            .ok_or(StoreError::TaskNotFound)
    }

    /// Overwrites title and description of one of the caller's tasks.
    pub async fn update_task(&self, username: &str, update: TaskUpdate) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let task = inner.list_mut(username)?.find_mut(update.id)?;
        task.edit(update.title, update.description, Utc::now());
        Ok(())
    }

    pub async fn resolve_task(&self, username: &str, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.list_mut(username)?.find_mut(id)?.resolve(Utc::now());
        Ok(())
    }

    /// Soft delete: the task is kept and only reachable through the archive.
    pub async fn delete_task(&self, username: &str, id: i64) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.list_mut(username)?.find_mut(id)?.archive(Utc::now());
        Ok(())
    }
}

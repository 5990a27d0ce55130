use log::{debug, info};

use crate::auth::AuthenticatedUser;
use crate::error::AppError;
use crate::models::{TaskInput, TaskResponse, TaskUpdate};
use crate::store::MemoryStore;

/// Task operations, each scoped to the caller passed in.
#[derive(Clone)]
pub struct TaskService {
    store: MemoryStore,
}

impl TaskService {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub async fn add(&self, user: &AuthenticatedUser, input: TaskInput) -> Result<i64, AppError> {
        let id = self.store.add_task(user.username(), input).await?;
        info!("user {} created task {}", user.username(), id);
        Ok(id)
    }

    pub async fn update(&self, user: &AuthenticatedUser, update: TaskUpdate) -> Result<(), AppError> {
        let id = update.id;
        self.store.update_task(user.username(), update).await?;
        info!("user {} updated task {}", user.username(), id);
        Ok(())
    }

    pub async fn resolve(&self, user: &AuthenticatedUser, id: i64) -> Result<(), AppError> {
        self.store.resolve_task(user.username(), id).await?;
        info!("user {} resolved task {}", user.username(), id);
        Ok(())
    }

    pub async fn delete(&self, user: &AuthenticatedUser, id: i64) -> Result<(), AppError> {
        self.store.delete_task(user.username(), id).await?;
        info!("user {} archived task {}", user.username(), id);
        Ok(())
    }

    pub async fn get(&self, user: &AuthenticatedUser, id: i64) -> Result<TaskResponse, AppError> {
        debug!("user {} fetching task {}", user.username(), id);
        Ok(self.store.task_by_id(user.username(), id).await?.into())
    }

    pub async fn active(&self, user: &AuthenticatedUser) -> Result<Vec<TaskResponse>, AppError> {
        let tasks = self.store.active_tasks(user.username()).await?;
        Ok(tasks.into_iter().map(TaskResponse::from).collect())
    }

    pub async fn archived(&self, user: &AuthenticatedUser) -> Result<Vec<TaskResponse>, AppError> {
        let tasks = self.store.archived_tasks(user.username()).await?;
        Ok(tasks.into_iter().map(TaskResponse::from).collect())
    }
}

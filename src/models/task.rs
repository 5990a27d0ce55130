use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where a task sits in its lifecycle.
///
/// `Resolved` and `Deleted` are both archived states; only `Active` tasks show
/// up in the active view.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Open and visible in the active view.
    Active,
    /// Completed. Terminal: neither delete nor update moves it out of this state.
    Resolved,
    /// Soft-deleted into the archive.
    Deleted,
}

/// Input structure for creating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task.
    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Free-form details, empty when omitted.
    /// Maximum length of 1000 characters.
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub description: String,
}

/// Input structure for editing a task. Only title and description can change.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskUpdate {
    /// Identifier of the task within the caller's own list.
    pub id: i64,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 1000))]
    #[serde(default)]
    pub description: String,
}

/// A task as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Per-owner identifier, starting at 1.
    pub id: i64,
    /// Username of the owner.
    pub owner: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set exactly when `status` is `Resolved`.
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new active task. `created_at` and `updated_at` are both `now`.
    pub fn new(id: i64, owner: &str, input: TaskInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            owner: owner.to_string(),
            title: input.title,
            description: input.description,
            status: TaskStatus::Active,
            created_at: now,
            updated_at: now,
            resolved_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == TaskStatus::Active
    }

    pub fn is_resolved(&self) -> bool {
        self.status == TaskStatus::Resolved
    }

    pub fn is_archived(&self) -> bool {
        !self.is_active()
    }

    /// Overwrites title and description. The status is left alone.
    pub fn edit(&mut self, title: String, description: String, now: DateTime<Utc>) {
        self.title = title;
        self.description = description;
        self.touch(now);
    }

    /// Marks the task resolved. Resolving again re-stamps `resolved_at`.
    pub fn resolve(&mut self, now: DateTime<Utc>) {
        let now = self.touch(now);
        self.status = TaskStatus::Resolved;
        self.resolved_at = Some(now);
    }

    /// Moves the task into the archive. A resolved task stays resolved.
    pub fn archive(&mut self, now: DateTime<Utc>) {
        if self.status == TaskStatus::Active {
            self.status = TaskStatus::Deleted;
        }
        self.touch(now);
    }

    // Clock skew must never push updated_at behind created_at.
    fn touch(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.updated_at = now.max(self.created_at);
        self.updated_at
    }
}

/// Represents a task as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskResponse {
    pub id: i64,
    pub owner: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub is_resolved: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            is_resolved: task.is_resolved(),
            is_archived: task.is_archived(),
            id: task.id,
            owner: task.owner,
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: task.created_at,
            updated_at: task.updated_at,
            resolved_at: task.resolved_at,
        }
    }
}

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::access::models::SessionToken;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskFilter;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::user::models::UserId;

/// Port for task domain service operations.
///
/// Every operation acts on behalf of the token holder.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// Create a task owned by the token holder.
    ///
    /// # Errors
    /// * `Validation` - Title or description is empty
    /// * `Access` - Token is invalid or its subject no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn create_task(
        &self,
        token: &SessionToken,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// List the token holder's tasks matching `filter`, earliest due first.
    ///
    /// # Errors
    /// * `Access` - Token is invalid or its subject no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn list_tasks(
        &self,
        token: &SessionToken,
        filter: TaskFilter,
    ) -> Result<Vec<Task>, TaskError>;

    /// Retrieve one task.
    ///
    /// # Errors
    /// * `Access` - Token invalid, actor missing, or the task belongs to someone else
    /// * `NotFound` - Task does not exist
    async fn get_task(&self, token: &SessionToken, id: &TaskId) -> Result<Task, TaskError>;

    /// Apply a partial update to one task.
    ///
    /// # Errors
    /// * `Access` - Token invalid, actor missing, or the task belongs to someone else
    /// * `NotFound` - Task does not exist
    /// * `Validation` - Title or description would become empty
    async fn update_task(
        &self,
        token: &SessionToken,
        id: &TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// Delete one task.
    ///
    /// # Errors
    /// * `Access` - Token invalid, actor missing, or the task belongs to someone else
    /// * `NotFound` - Task does not exist
    async fn delete_task(&self, token: &SessionToken, id: &TaskId) -> Result<(), TaskError>;
}

/// Persistence operations for task aggregate.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// Persist new task to storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    /// Retrieve task by identifier.
    ///
    /// # Returns
    /// Optional task entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;

    /// Retrieve an owner's tasks matching `filter`, ordered by due date.
    ///
    /// # Arguments
    /// * `owner_id` - Owning user
    /// * `filter` - View and optional priority
    /// * `now` - Reference instant for the overdue view
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(
        &self,
        owner_id: &UserId,
        filter: &TaskFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<Task>, TaskError>;

    /// Update existing task in storage. The owner column is never written.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, task: Task) -> Result<Task, TaskError>;

    /// Remove task from storage.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &TaskId) -> Result<(), TaskError>;
}

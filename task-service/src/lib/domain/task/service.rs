use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::access::guard::OwnershipGuard;
use crate::domain::access::models::SessionToken;
use crate::domain::access::ports::TokenServicePort;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskFilter;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::task::ports::TaskRepository;
use crate::domain::task::ports::TaskServicePort;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Domain service for task operations under ownership control.
pub struct TaskService<TR, UR, TS>
where
    TR: TaskRepository,
    UR: UserRepository,
    TS: TokenServicePort,
{
    repository: Arc<TR>,
    guard: OwnershipGuard<UR, TS>,
}

impl<TR, UR, TS> TaskService<TR, UR, TS>
where
    TR: TaskRepository,
    UR: UserRepository,
    TS: TokenServicePort,
{
    /// Create a new task service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Task persistence implementation
    /// * `guard` - Ownership policy shared with the user service
    pub fn new(repository: Arc<TR>, guard: OwnershipGuard<UR, TS>) -> Self {
        Self { repository, guard }
    }

    /// Resolve the actor, load the task and check that the actor owns it.
    async fn owned_task(
        &self,
        token: &SessionToken,
        id: &TaskId,
    ) -> Result<(User, Task), TaskError> {
        let actor = self.guard.resolve_actor(token).await?;

        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id.to_string()))?;

        self.guard.authorize(&actor, &task)?;

        Ok((actor, task))
    }
}

#[async_trait]
impl<TR, UR, TS> TaskServicePort for TaskService<TR, UR, TS>
where
    TR: TaskRepository,
    UR: UserRepository,
    TS: TokenServicePort,
{
    async fn create_task(
        &self,
        token: &SessionToken,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError> {
        if command.title.trim().is_empty() || command.description.trim().is_empty() {
            return Err(TaskError::Validation(
                "Title and description are required".to_string(),
            ));
        }

        let actor = self.guard.resolve_actor(token).await?;
        let task = Task::create(actor.id, command);

        let created_task = self.repository.create(task).await?;
        tracing::info!(
            task_id = %created_task.id,
            owner_id = %created_task.owner_id,
            "Task created"
        );

        Ok(created_task)
    }

    async fn list_tasks(
        &self,
        token: &SessionToken,
        filter: TaskFilter,
    ) -> Result<Vec<Task>, TaskError> {
        let actor = self.guard.resolve_actor(token).await?;

        self.repository
            .list_by_owner(&actor.id, &filter, Utc::now())
            .await
    }

    async fn get_task(&self, token: &SessionToken, id: &TaskId) -> Result<Task, TaskError> {
        let (_, task) = self.owned_task(token, id).await?;
        Ok(task)
    }

    async fn update_task(
        &self,
        token: &SessionToken,
        id: &TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError> {
        let (_, mut task) = self.owned_task(token, id).await?;

        task.apply(command)?;

        self.repository.update(task).await
    }

    async fn delete_task(&self, token: &SessionToken, id: &TaskId) -> Result<(), TaskError> {
        let (actor, task) = self.owned_task(token, id).await?;

        self.repository.delete(&task.id).await?;
        tracing::info!(task_id = %task.id, owner_id = %actor.id, "Task deleted");

        Ok(())
    }
}

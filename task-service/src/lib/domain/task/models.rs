use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::access::models::Owned;
use crate::domain::task::errors::TaskError;
use crate::domain::task::errors::TaskIdError;
use crate::domain::user::models::UserId;

/// Task aggregate entity.
///
/// The owner is fixed at creation; no command can change it.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: TaskStatus,
    pub completed: bool,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Build a new task owned by `owner_id`.
    ///
    /// # Arguments
    /// * `owner_id` - Creating user
    /// * `command` - Validated task attributes
    ///
    /// # Returns
    /// Task with defaults for unset status and priority
    pub fn create(owner_id: UserId, command: CreateTaskCommand) -> Self {
        let now = Utc::now();

        Self {
            id: TaskId::new(),
            owner_id,
            title: command.title,
            description: command.description,
            due_date: command.due_date,
            status: command.status.unwrap_or_default(),
            completed: command.completed,
            priority: command.priority.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Fields left as `None` are untouched.
    ///
    /// # Errors
    /// * `Validation` - Title or description would become empty
    pub fn apply(&mut self, command: UpdateTaskCommand) -> Result<(), TaskError> {
        if let Some(title) = command.title {
            if title.trim().is_empty() {
                return Err(TaskError::Validation("Title cannot be empty".to_string()));
            }
            self.title = title;
        }

        if let Some(description) = command.description {
            if description.trim().is_empty() {
                return Err(TaskError::Validation(
                    "Description cannot be empty".to_string(),
                ));
            }
            self.description = description;
        }

        if let Some(due_date) = command.due_date {
            self.due_date = due_date;
        }

        if let Some(status) = command.status {
            self.status = status;
        }

        if let Some(completed) = command.completed {
            self.completed = completed;
        }

        if let Some(priority) = command.priority {
            self.priority = priority;
        }

        self.updated_at = Utc::now();
        Ok(())
    }
}

impl Owned for Task {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Task unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Generate a new random task ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a task ID from string.
    ///
    /// # Errors
    /// * `Empty` - String is empty
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TaskIdError> {
        if s.trim().is_empty() {
            return Err(TaskIdError::Empty);
        }

        Uuid::parse_str(s)
            .map(TaskId)
            .map_err(|e| TaskIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Active,
    Inactive,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Active => "active",
            TaskStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(TaskStatus::Active),
            "inactive" => Ok(TaskStatus::Inactive),
            other => Err(TaskError::InvalidStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(TaskError::InvalidPriority(other.to_string())),
        }
    }
}

/// Which slice of a user's tasks to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskView {
    #[default]
    All,
    Completed,
    Pending,
    Overdue,
}

/// Listing criteria: a view plus an optional priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskFilter {
    pub view: TaskView,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn new(view: TaskView, priority: Option<Priority>) -> Self {
        Self { view, priority }
    }

    /// Required value of the completion flag, if the view constrains it.
    pub fn completed(&self) -> Option<bool> {
        match self.view {
            TaskView::All => None,
            TaskView::Completed => Some(true),
            TaskView::Pending | TaskView::Overdue => Some(false),
        }
    }

    /// Exclusive upper bound on the due date, if the view constrains it.
    pub fn due_before(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self.view {
            TaskView::Overdue => Some(now),
            _ => None,
        }
    }

    pub fn matches(&self, task: &Task, now: DateTime<Utc>) -> bool {
        self.completed().map_or(true, |c| task.completed == c)
            && self.due_before(now).map_or(true, |bound| task.due_date < bound)
            && self.priority.map_or(true, |p| task.priority == p)
    }
}

/// Command to create a task.
#[derive(Debug)]
pub struct CreateTaskCommand {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub status: Option<TaskStatus>,
    pub completed: bool,
    pub priority: Option<Priority>,
}

/// Command to update a task with optional fields.
///
/// All fields are optional to support partial updates.
#[derive(Debug, Default)]
pub struct UpdateTaskCommand {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<TaskStatus>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
}

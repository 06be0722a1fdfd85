use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use mockall::mock;

use crate::domain::access::errors::TokenError;
use crate::domain::access::models::SessionToken;
use crate::domain::access::ports::TokenServicePort;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskFilter;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

mock! {
    pub TestUserRepository {}

    #[async_trait]
    impl UserRepository for TestUserRepository {
        async fn create(&self, user: User) -> Result<User, UserError>;
        async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
        async fn update(&self, user: User) -> Result<User, UserError>;
    }
}

mock! {
    pub TestTaskRepository {}

    #[async_trait]
    impl TaskRepository for TestTaskRepository {
        async fn create(&self, task: Task) -> Result<Task, TaskError>;
        async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;
        async fn list_by_owner(&self, owner_id: &UserId, filter: &TaskFilter, now: DateTime<Utc>) -> Result<Vec<Task>, TaskError>;
        async fn update(&self, task: Task) -> Result<Task, TaskError>;
        async fn delete(&self, id: &TaskId) -> Result<(), TaskError>;
    }
}

mock! {
    pub TestTokenService {}

    impl TokenServicePort for TestTokenService {
        fn issue(&self, subject: &EmailAddress) -> Result<String, TokenError>;
        fn verify(&self, token: &SessionToken) -> Result<String, TokenError>;
    }
}

/// Registered user with a placeholder digest.
pub fn sample_user(email: &str) -> User {
    User::register(
        EmailAddress::new(email.to_string()).unwrap(),
        "Sample".to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$placeholder$placeholder".to_string(),
    )
}

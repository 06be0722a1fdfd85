use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::access::guard::OwnershipGuard;
use crate::domain::access::models::SessionToken;
use crate::domain::access::ports::TokenServicePort;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::PublicUser;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::MIN_PASSWORD_LENGTH;
use crate::user::errors::UserError;
use crate::user::ports::PasswordHasherPort;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service for registration, login and profile management.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR, PH, TS>
where
    UR: UserRepository,
    PH: PasswordHasherPort,
    TS: TokenServicePort,
{
    repository: Arc<UR>,
    password_hasher: Arc<PH>,
    token_service: Arc<TS>,
    guard: OwnershipGuard<UR, TS>,
}

impl<UR, PH, TS> UserService<UR, PH, TS>
where
    UR: UserRepository,
    PH: PasswordHasherPort,
    TS: TokenServicePort,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Credential hashing implementation
    /// * `token_service` - Session token implementation
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>, password_hasher: Arc<PH>, token_service: Arc<TS>) -> Self {
        let guard = OwnershipGuard::new(Arc::clone(&repository), Arc::clone(&token_service));

        Self {
            repository,
            password_hasher,
            token_service,
            guard,
        }
    }
}

#[async_trait]
impl<UR, PH, TS> UserServicePort for UserService<UR, PH, TS>
where
    UR: UserRepository,
    PH: PasswordHasherPort,
    TS: TokenServicePort,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError> {
        // Not atomic with the insert; the unique index on email catches the race.
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        if command.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let password_hash = self.password_hasher.hash(&command.password).await?;
        let user = User::register(command.email, command.name, password_hash);

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError> {
        if command.email.is_empty() || command.password.is_empty() {
            return Err(UserError::Validation(
                "Email or password is required".to_string(),
            ));
        }

        let user = self
            .repository
            .find_by_email(&command.email)
            .await?
            .ok_or(UserError::EmailNotFound)?;

        if !self
            .password_hasher
            .verify(Some(&user), &command.password)
            .await
        {
            tracing::warn!(user_id = %user.id, "Login rejected: password mismatch");
            return Err(UserError::InvalidCredentials);
        }

        let token = self.token_service.issue(&user.email)?;
        tracing::info!(user_id = %user.id, "Session token issued");

        Ok(LoginOutcome {
            token,
            user: PublicUser::from(&user),
        })
    }

    async fn logout(&self, had_session: bool) {
        tracing::info!(had_session, "Session cookie cleared");
    }

    async fn current_user(&self, token: &SessionToken) -> Result<User, UserError> {
        Ok(self.guard.resolve_actor(token).await?)
    }

    async fn update_profile(
        &self,
        token: &SessionToken,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let actor = self.guard.resolve_actor(token).await?;

        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        self.guard.authorize(&actor, &user)?;

        if let Some(name) = command.name {
            if name.trim().is_empty() {
                return Err(UserError::Validation("Name cannot be empty".to_string()));
            }
            user.name = name;
        }

        if let Some(bio) = command.bio {
            user.bio = bio;
        }

        if let Some(photo) = command.photo {
            user.photo = photo;
        }

        user.updated_at = Utc::now();

        self.repository.update(user).await
    }
}

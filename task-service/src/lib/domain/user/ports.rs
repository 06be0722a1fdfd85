use async_trait::async_trait;

use crate::domain::access::models::SessionToken;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for user domain service operations: registration, login and profile.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `command` - Email, plain text password and display name
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Validation` - Password is shorter than the minimum length
    /// * `PasswordHashing` - Hashing primitive failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<User, UserError>;

    /// Check credentials and issue a session token.
    ///
    /// # Arguments
    /// * `command` - Raw email and password
    ///
    /// # Returns
    /// Token and redacted user view
    ///
    /// # Errors
    /// * `Validation` - Email or password is empty
    /// * `EmailNotFound` - No user has this email
    /// * `InvalidCredentials` - Password does not match
    /// * `Token` - Token issuance failed
    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError>;

    /// Record that a client ended its session.
    ///
    /// Tokens are stateless: nothing is verified or revoked here, and the
    /// method only logs. Clearing the cookie is the caller's job.
    async fn logout(&self, had_session: bool);

    /// Resolve the profile of the token holder.
    ///
    /// # Errors
    /// * `Access` - Token is invalid or its subject no longer exists
    async fn current_user(&self, token: &SessionToken) -> Result<User, UserError>;

    /// Edit a profile owned by the token holder.
    ///
    /// # Arguments
    /// * `token` - Session token of the actor
    /// * `id` - Profile to edit
    /// * `command` - Optional name, bio and photo
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `Access` - Token is invalid, actor missing, or actor is not the profile owner
    /// * `NotFound` - Target user does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(
        &self,
        token: &SessionToken,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError>;
}

/// Persistence operations for user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address (exact match).
    ///
    /// # Arguments
    /// * `email` - Email address string
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Update existing user in storage.
    ///
    /// # Arguments
    /// * `user` - User entity with updated fields
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, user: User) -> Result<User, UserError>;
}

/// One-way credential hashing.
#[async_trait]
pub trait PasswordHasherPort: Send + Sync + 'static {
    /// Hash a plaintext password into a self-describing digest.
    ///
    /// # Errors
    /// * `PasswordHashing` - Hashing primitive failed
    async fn hash(&self, plaintext: &str) -> Result<String, UserError>;

    /// Check a plaintext password against a user's stored digest.
    ///
    /// Returns false when `user` is absent, on mismatch, or when the stored
    /// digest is malformed. Never fails.
    async fn verify(&self, user: Option<&User>, plaintext: &str) -> bool;
}

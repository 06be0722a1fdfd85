use std::sync::Arc;

use crate::domain::access::errors::AccessError;
use crate::domain::access::models::Owned;
use crate::domain::access::models::SessionToken;
use crate::domain::access::ports::TokenServicePort;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;

/// Ownership policy applied before every read or mutation of an owned resource.
///
/// Callers run the steps in a fixed order:
/// 1. [`resolve_actor`](Self::resolve_actor) turns the token into a user record
/// 2. the caller loads the target resource and reports its own not-found error
/// 3. [`authorize`](Self::authorize) compares the resource owner with the actor
pub struct OwnershipGuard<UR, TS>
where
    UR: UserRepository,
    TS: TokenServicePort,
{
    users: Arc<UR>,
    tokens: Arc<TS>,
}

impl<UR, TS> Clone for OwnershipGuard<UR, TS>
where
    UR: UserRepository,
    TS: TokenServicePort,
{
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            tokens: Arc::clone(&self.tokens),
        }
    }
}

impl<UR, TS> OwnershipGuard<UR, TS>
where
    UR: UserRepository,
    TS: TokenServicePort,
{
    /// Create a new guard.
    ///
    /// # Arguments
    /// * `users` - Store used to resolve token subjects
    /// * `tokens` - Token verifier
    pub fn new(users: Arc<UR>, tokens: Arc<TS>) -> Self {
        Self { users, tokens }
    }

    /// Resolve the user a token speaks for.
    ///
    /// # Arguments
    /// * `token` - Session token presented by the client
    ///
    /// # Returns
    /// The acting user
    ///
    /// # Errors
    /// * `InvalidToken` - Token does not verify
    /// * `UserNotFound` - No user with the token subject, or the lookup failed
    pub async fn resolve_actor(&self, token: &SessionToken) -> Result<User, AccessError> {
        let subject = self.tokens.verify(token)?;

        match self.users.find_by_email(&subject).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => {
                tracing::warn!("Token subject does not match any user");
                Err(AccessError::UserNotFound)
            }
            Err(e) => {
                tracing::error!(error = %e, "User lookup failed while resolving actor");
                Err(AccessError::UserNotFound)
            }
        }
    }

    /// Allow the operation only if `actor` owns `resource`.
    ///
    /// # Errors
    /// * `PermissionDenied` - Resource belongs to another user
    pub fn authorize<R: Owned>(&self, actor: &User, resource: &R) -> Result<(), AccessError> {
        let owner_id = resource.owner_id();
        if owner_id == actor.id {
            return Ok(());
        }

        tracing::warn!(
            actor_id = %actor.id,
            owner_id = %owner_id,
            "Ownership check failed"
        );
        Err(AccessError::PermissionDenied)
    }
}

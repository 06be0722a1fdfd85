use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::ports::PasswordHasherPort;

/// Argon2id adapter for the password hashing port.
///
/// Hashing and verification are CPU-bound and run on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher {
    hasher: auth::PasswordHasher,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self {
            hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl PasswordHasherPort for Argon2PasswordHasher {
    async fn hash(&self, plaintext: &str) -> Result<String, UserError> {
        let hasher = self.hasher;
        let plaintext = plaintext.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| UserError::PasswordHashing(e.to_string()))?
            .map_err(|e| UserError::PasswordHashing(e.to_string()))
    }

    async fn verify(&self, user: Option<&User>, plaintext: &str) -> bool {
        let Some(user) = user else {
            return false;
        };

        let hasher = self.hasher;
        let plaintext = plaintext.to_owned();
        let digest = user.password_hash.clone();

        match tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest)).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}

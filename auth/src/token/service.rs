use std::sync::Arc;

use chrono::Duration;

use super::clock::Clock;
use super::clock::SystemClock;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Validity window of an issued token unless configured otherwise.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Issues and verifies stateless session tokens.
///
/// A token binds a subject to an expiry instant. Verification depends only on
/// the token, the signing secret and the current time of the injected clock.
pub struct TokenService {
    handler: JwtHandler,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Create a token service backed by the system clock.
    ///
    /// # Arguments
    /// * `secret` - Signing secret
    /// * `ttl` - Validity window of issued tokens
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, JwtError> {
        Self::with_clock(secret, ttl, Arc::new(SystemClock))
    }

    /// Create a token service with an explicit time source.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    pub fn with_clock(secret: &[u8], ttl: Duration, clock: Arc<dyn Clock>) -> Result<Self, JwtError> {
        Ok(Self {
            handler: JwtHandler::new(secret)?,
            ttl,
            clock,
        })
    }

    /// Issue a signed token for `subject`, valid from now for the configured TTL.
    ///
    /// # Errors
    /// * `ExpiryOutOfRange` - Now plus the TTL overflows the calendar
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject, self.clock.now(), self.ttl)?;
        self.handler.encode(&claims)
    }

    /// Verify a token and return the subject it asserts.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature does not verify
    /// * `DecodingFailed` - Token is malformed or claims have the wrong shape
    /// * `MissingClaim` - Subject is empty
    /// * `TokenExpired` - Expiry is before the current time
    pub fn verify(&self, token: &str) -> Result<String, JwtError> {
        let claims: Claims = self.handler.decode(token)?;

        if claims.sub.is_empty() {
            return Err(JwtError::MissingClaim("sub".to_string()));
        }

        if claims.is_expired(self.clock.now().timestamp()) {
            return Err(JwtError::TokenExpired);
        }

        Ok(claims.sub)
    }
}

use std::sync::Arc;

use auth::Clock;
use auth::JwtError;
use auth::TokenService;
use chrono::Duration;

use crate::domain::access::errors::TokenError;
use crate::domain::access::models::SessionToken;
use crate::domain::access::ports::TokenServicePort;
use crate::domain::user::models::EmailAddress;

/// HS256 JWT adapter for the token port.
pub struct JwtTokenService {
    tokens: TokenService,
}

impl JwtTokenService {
    /// Create an adapter signing with `secret`, issuing tokens valid for `ttl_hours`.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    /// * `ExpiryOutOfRange` - `ttl_hours` does not fit in a duration
    pub fn new(secret: &str, ttl_hours: i64) -> Result<Self, JwtError> {
        Ok(Self {
            tokens: TokenService::new(secret.as_bytes(), ttl(ttl_hours)?)?,
        })
    }

    /// Same as [`new`](Self::new) with an explicit time source.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    /// * `ExpiryOutOfRange` - `ttl_hours` does not fit in a duration
    pub fn with_clock(
        secret: &str,
        ttl_hours: i64,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, JwtError> {
        Ok(Self {
            tokens: TokenService::with_clock(secret.as_bytes(), ttl(ttl_hours)?, clock)?,
        })
    }
}

fn ttl(hours: i64) -> Result<Duration, JwtError> {
    Duration::try_hours(hours).ok_or(JwtError::ExpiryOutOfRange)
}

impl TokenServicePort for JwtTokenService {
    fn issue(&self, subject: &EmailAddress) -> Result<String, TokenError> {
        self.tokens
            .issue(subject.as_str())
            .map_err(|e| TokenError::IssueFailed(e.to_string()))
    }

    fn verify(&self, token: &SessionToken) -> Result<String, TokenError> {
        self.tokens.verify(token.as_str()).map_err(|e| {
            // The reason stays in the logs; callers only learn that the token is invalid.
            tracing::debug!(reason = %e, "Session token rejected");
            TokenError::Invalid
        })
    }
}

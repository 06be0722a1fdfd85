use crate::domain::access::errors::TokenError;
use crate::domain::access::models::SessionToken;
use crate::domain::user::models::EmailAddress;

/// Issuance and verification of stateless session tokens.
///
/// Verification is CPU-bound and synchronous.
pub trait TokenServicePort: Send + Sync + 'static {
    /// Issue a token asserting `subject` for the configured lifetime.
    ///
    /// # Errors
    /// * `IssueFailed` - Signing failed
    fn issue(&self, subject: &EmailAddress) -> Result<String, TokenError>;

    /// Verify a token and return the subject email it asserts.
    ///
    /// # Errors
    /// * `Invalid` - Malformed, wrongly signed, expired or missing its subject
    fn verify(&self, token: &SessionToken) -> Result<String, TokenError>;
}

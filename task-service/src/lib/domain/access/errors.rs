use thiserror::Error;

/// Token issuance and verification failures.
///
/// Every verification failure collapses into `Invalid`, whatever the cause.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid or expired token")]
    Invalid,

    #[error("Token issuance failed: {0}")]
    IssueFailed(String),
}

/// Failures of the ownership check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    #[error("You do not have permission to access this resource")]
    PermissionDenied,
}

impl From<TokenError> for AccessError {
    fn from(_: TokenError) -> Self {
        AccessError::InvalidToken
    }
}

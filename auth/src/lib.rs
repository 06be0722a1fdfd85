//! Authentication utilities library
//!
//! Provides the credential and session primitives used by the task service:
//! - Password hashing (Argon2id)
//! - JWT encoding and decoding (HS256)
//! - Token issuance and verification with a fixed time-to-live
//!
//! Services define their own ports and adapt these implementations, so the
//! domain layer never depends on this crate directly.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24)).unwrap();
//! let token = tokens.issue("alice@example.com").unwrap();
//! assert_eq!(tokens.verify(&token).unwrap(), "alice@example.com");
//! ```

pub mod jwt;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Clock;
pub use token::ManualClock;
pub use token::SystemClock;
pub use token::TokenService;
pub use token::DEFAULT_TOKEN_TTL_HOURS;

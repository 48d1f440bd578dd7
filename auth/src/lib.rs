//! Authentication primitives for the movie API
//!
//! - Password hashing (Argon2id, configurable work factor)
//! - JWT issuance and verification (HS256) with classified failures
//! - An [`Authenticator`] that ties the two together for login
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::with_work_factor(2).unwrap();
//! let hash = hasher.hash("secret1").unwrap();
//! assert!(hasher.verify("secret1", &hash).unwrap());
//! assert!(!hasher.verify("secret2", &hash).unwrap());
//! ```
//!
//! ## Login Flow
//! ```
//! use auth::{Authenticator, PasswordHasher};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     PasswordHasher::new(),
//!     Duration::hours(24),
//! );
//!
//! let hash = auth.hash_password("secret1").unwrap();
//! let result = auth.authenticate("secret1", &hash, "user-id", "alice1").unwrap();
//!
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "user-id");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;

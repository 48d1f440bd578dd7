use std::sync::OnceLock;

use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
    /// Verified against when the account does not exist.
    placeholder_hash: OnceLock<Option<String>>,
}

const PLACEHOLDER_PASSWORD: &str = "placeholder-password-never-matches";

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Signed bearer token
    pub access_token: String,
    pub claims: Claims,
}

/// Authentication operation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Shared secret for signing and verifying tokens
    /// * `password_hasher` - Hasher used for registration and login
    /// * `token_ttl` - Lifetime of issued tokens
    pub fn new(jwt_secret: &[u8], password_hasher: PasswordHasher, token_ttl: Duration) -> Self {
        Self {
            password_hasher,
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl,
            placeholder_hash: OnceLock::new(),
        }
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for the given identity.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `PasswordError` - Stored hash could not be checked
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: impl ToString,
        username: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let claims = Claims::for_user(user_id, username, self.token_ttl);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(AuthenticationResult {
            access_token,
            claims,
        })
    }

    /// Refuse a login for an account that does not exist.
    ///
    /// Runs one password verification against a placeholder hash built with
    /// this authenticator's parameters, then answers `InvalidCredentials`.
    pub fn reject_unknown_account(&self, password: &str) -> AuthenticationError {
        let placeholder = self
            .placeholder_hash
            .get_or_init(|| self.password_hasher.hash(PLACEHOLDER_PASSWORD).ok());

        if let Some(hash) = placeholder {
            let _ = self.password_hasher.verify(password, hash);
        }

        AuthenticationError::InvalidCredentials
    }

    /// Validate a bearer token and return its claims.
    ///
    /// # Errors
    /// * `JwtError` - Token is malformed, tampered with, expired, or incomplete
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}

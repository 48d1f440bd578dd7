use thiserror::Error;

/// Error type for JWT operations.
///
/// Decoding failures are classified so callers can log the actual cause while
/// answering clients with a single generic message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    TokenExpired,

    #[error("Missing required claim: {0}")]
    MissingClaim(String),
}

impl JwtError {
    /// Short, stable label for log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            JwtError::EncodingFailed(_) => "encoding_failed",
            JwtError::Malformed(_) => "malformed",
            JwtError::InvalidSignature => "invalid_signature",
            JwtError::TokenExpired => "expired",
            JwtError::MissingClaim(_) => "missing_claim",
        }
    }
}

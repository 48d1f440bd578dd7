use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::Error as JsonWebTokenError;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// HS256 token signer and verifier bound to one shared secret.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtHandler {
    /// Create a handler for the given shared secret.
    ///
    /// Decoding requires the `sub` and `exp` claims and rejects expired tokens.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["sub", "exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign claims into a compact JWT.
    ///
    /// # Errors
    /// * `EncodingFailed` - Claims could not be serialized or signed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry and decode its claims.
    ///
    /// # Errors
    /// * `Malformed` - Not a JWT, bad base64/JSON, or wrong algorithm
    /// * `InvalidSignature` - Signed with a different secret or tampered with
    /// * `TokenExpired` - `exp` is in the past
    /// * `MissingClaim` - A required claim is absent
    pub fn decode<T: for<'de> Deserialize<'de>>(&self, token: &str) -> Result<T, JwtError> {
        decode::<T>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(classify)
    }
}

fn classify(err: JsonWebTokenError) -> JwtError {
    match err.kind() {
        ErrorKind::InvalidSignature => JwtError::InvalidSignature,
        ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        ErrorKind::MissingRequiredClaim(claim) => JwtError::MissingClaim(claim.clone()),
        _ => JwtError::Malformed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::jwt::Claims;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_encode_and_decode() {
        let handler = JwtHandler::new(SECRET);
        let claims = Claims::for_user("user123", "alice1", Duration::hours(1));

        let token = handler.encode(&claims).expect("Failed to encode token");
        let decoded: Claims = handler.decode(&token).expect("Failed to decode token");

        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let handler = JwtHandler::new(SECRET);

        let result = handler.decode::<Claims>("invalid.token.here");
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let issuer = JwtHandler::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = JwtHandler::new(b"secret2_at_least_32_bytes_long_key!");
        let claims = Claims::for_user("user123", "alice1", Duration::hours(1));

        let token = issuer.encode(&claims).unwrap();

        assert_eq!(
            verifier.decode::<Claims>(&token),
            Err(JwtError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let handler = JwtHandler::new(SECRET);
        let genuine = handler
            .encode(&Claims::for_user("user123", "alice1", Duration::hours(1)))
            .unwrap();
        let forged = handler
            .encode(&Claims::for_user("admin", "admin", Duration::hours(1)))
            .unwrap();

        // Payload of one token with the signature of another.
        let genuine_parts: Vec<&str> = genuine.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let spliced = format!(
            "{}.{}.{}",
            genuine_parts[0], forged_parts[1], genuine_parts[2]
        );

        assert_eq!(
            handler.decode::<Claims>(&spliced),
            Err(JwtError::InvalidSignature)
        );
    }

    #[test]
    fn test_expired_token() {
        let handler = JwtHandler::new(SECRET);
        let expired = Claims::for_user("user123", "alice1", Duration::hours(1))
            .with_expiration((Utc::now() - Duration::hours(2)).timestamp());

        let token = handler.encode(&expired).unwrap();

        assert_eq!(handler.decode::<Claims>(&token), Err(JwtError::TokenExpired));
    }

    #[test]
    fn test_missing_exp_claim() {
        #[derive(Serialize)]
        struct NoExpiry {
            sub: String,
        }

        let handler = JwtHandler::new(SECRET);
        let token = handler
            .encode(&NoExpiry {
                sub: "user123".to_string(),
            })
            .unwrap();

        assert_eq!(
            handler.decode::<serde_json::Value>(&token),
            Err(JwtError::MissingClaim("exp".to_string()))
        );
    }
}

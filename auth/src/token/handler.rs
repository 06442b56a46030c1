use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed access tokens.
///
/// Uses HS256 (HMAC with SHA-256). Verification checks the signature
/// before any claim is trusted, then rejects expired tokens with zero
/// leeway so `exp` is exact.
pub struct TokenHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenHandler {
    /// Create a new token handler with a signing secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for the given claims.
    ///
    /// # Arguments
    /// * `claims` - Identity claims to encode
    ///
    /// # Returns
    /// Opaque token string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// # Arguments
    /// * `token` - Token string to verify
    ///
    /// # Returns
    /// Decoded claims
    ///
    /// # Errors
    /// * `Expired` - Token is past its expiration time
    /// * `Invalid` - Signature mismatch or malformed token
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_issue_and_verify() {
        let handler = TokenHandler::new(SECRET);
        let claims = Claims::new("Ana", "ana@example.com", 24);

        let token = handler.issue(&claims).expect("Failed to issue token");
        assert!(!token.is_empty());

        let decoded = handler.verify(&token).expect("Failed to verify token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_verify_malformed_token() {
        let handler = TokenHandler::new(SECRET);

        let result = handler.verify("invalid.token.here");
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = TokenHandler::new(SECRET);
        let verifier = TokenHandler::new(b"a_different_secret_32_bytes_long!!!");

        let token = issuer
            .issue(&Claims::new("Ana", "ana@example.com", 24))
            .expect("Failed to issue token");

        let result = verifier.verify(&token);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_verify_expired_token() {
        let handler = TokenHandler::new(SECRET);

        let mut claims = Claims::new("Ana", "ana@example.com", 24);
        claims.iat = Utc::now().timestamp() - 7200;
        claims.exp = Utc::now().timestamp() - 3600;

        let token = handler.issue(&claims).expect("Failed to issue token");

        let result = handler.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let handler = TokenHandler::new(SECRET);
        let token = handler
            .issue(&Claims::new("Ana", "ana@example.com", 24))
            .expect("Failed to issue token");

        // Flip a character in the payload segment.
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        parts[1] = format!("x{}", &parts[1][1..]);
        let tampered = parts.join(".");

        let result = handler.verify(&tampered);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }
}

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims carried by an access token.
///
/// Tokens are stateless: everything the gate needs lives in the signed
/// payload. `exp` is always `iat` plus the configured TTL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject display name
    pub name: String,

    /// Subject email address
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject with automatic expiration.
    ///
    /// # Arguments
    /// * `name` - Subject display name
    /// * `email` - Subject email address
    /// * `ttl_hours` - Hours until the token expires
    ///
    /// # Returns
    /// Claims stamped with the current time and computed expiry
    pub fn new(name: impl Into<String>, email: impl Into<String>, ttl_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(ttl_hours);

        Self {
            name: name.into(),
            email: email.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the claims are expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims_expiry_window() {
        let claims = Claims::new("Ana", "ana@example.com", 24);

        assert_eq!(claims.name, "Ana");
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60); // 24 hours
    }

    #[test]
    fn test_is_expired() {
        let mut claims = Claims::new("Ana", "ana@example.com", 1);
        claims.exp = 1000;

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001));
    }
}

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenHandler;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Holds the process-wide signing secret and hashing configuration; the
/// service constructs one at startup and shares it between the login flow
/// and the access gate.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_handler: TokenHandler,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator with the default hashing cost.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for token signing
    pub fn new(token_secret: &[u8]) -> Self {
        Self::with_cost(token_secret, PasswordHasher::DEFAULT_COST)
    }

    /// Create a new authenticator with an explicit hashing cost factor.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for token signing
    /// * `cost` - bcrypt work factor
    pub fn with_cost(token_secret: &[u8], cost: u32) -> Self {
        Self {
            password_hasher: PasswordHasher::with_cost(cost),
            token_handler: TokenHandler::new(token_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Password is empty or hashing failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `claims` - Identity claims to encode in the token
    ///
    /// # Returns
    /// AuthenticationResult with the signed access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `Token` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &Claims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_handler.issue(claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Verify an access token and return its claims.
    ///
    /// # Errors
    /// * `Expired` - Token is past its expiration time
    /// * `Invalid` - Signature mismatch or malformed token
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_handler.verify(token)
    }
}

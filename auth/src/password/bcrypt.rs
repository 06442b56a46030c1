use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Wraps bcrypt with a configurable work factor. Each hash embeds its own
/// random salt, so hashing the same password twice yields different
/// strings that both verify.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Default bcrypt work factor.
    pub const DEFAULT_COST: u32 = 10;

    /// Create a password hasher with the default cost factor.
    pub fn new() -> Self {
        Self::with_cost(Self::DEFAULT_COST)
    }

    /// Create a password hasher with an explicit cost factor.
    ///
    /// Higher cost trades login latency for brute-force resistance.
    /// bcrypt accepts costs in the 4..=31 range.
    ///
    /// # Arguments
    /// * `cost` - bcrypt work factor
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt format hash string (embeds cost and salt)
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `HashingFailed` - bcrypt rejected the input or cost
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }

        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Returns false for a malformed hash string rather than erroring, so
    /// callers cannot distinguish a corrupt hash from a wrong password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `hash` - Stored password hash
    ///
    /// # Returns
    /// True if the password matches, false otherwise
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

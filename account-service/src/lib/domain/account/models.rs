use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::errors::AccountIdError;
use crate::domain::account::errors::AccountNameError;
use crate::domain::account::errors::EmailError;
use crate::domain::account::errors::PasswordPolicyError;

/// Account aggregate entity.
///
/// A registered account. Created once at registration, read at login and
/// lookup, never mutated or deleted by this service. The password hash is
/// opaque and never leaves the service.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: AccountName,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an account ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        Uuid::parse_str(s)
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type
///
/// Any non-empty string is a valid name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountName(String);

impl AccountName {
    /// Create a new valid account name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    pub fn new(name: String) -> Result<Self, AccountNameError> {
        if name.trim().is_empty() {
            return Err(AccountNameError::Empty);
        }
        Ok(Self(name))
    }

    /// Get the name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get the email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw password value type
///
/// Transient, input-only: carried from the request into the hasher and
/// never persisted. Enforces the minimum length policy.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    const MIN_LENGTH: usize = 6;

    /// Create a new policy-checked password.
    ///
    /// # Errors
    /// * `TooShort` - Password shorter than 6 characters
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        Ok(Self(password))
    }

    /// Get the raw password as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep raw passwords out of logs and error output.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Command to register a new account with validated fields
#[derive(Debug)]
pub struct RegisterAccountCommand {
    pub name: AccountName,
    pub email: EmailAddress,
    pub password: Password,
}

impl RegisterAccountCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `name` - Validated display name
    /// * `email` - Validated email address
    /// * `password` - Policy-checked raw password (hashed by the service)
    pub fn new(name: AccountName, email: EmailAddress, password: Password) -> Self {
        Self {
            name,
            email,
            password,
        }
    }
}

/// Login credentials with validated fields
///
/// Transient, input-only: never persisted.
#[derive(Debug)]
pub struct Credentials {
    pub email: EmailAddress,
    pub password: Password,
}

impl Credentials {
    pub fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_name_rejects_empty() {
        assert!(matches!(
            AccountName::new("".to_string()),
            Err(AccountNameError::Empty)
        ));
        assert!(matches!(
            AccountName::new("   ".to_string()),
            Err(AccountNameError::Empty)
        ));
        assert!(AccountName::new("Ana".to_string()).is_ok());
    }

    #[test]
    fn test_email_address_validation() {
        assert!(EmailAddress::new("ana@x.com".to_string()).is_ok());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }

    #[test]
    fn test_password_minimum_length() {
        assert!(matches!(
            Password::new("abc".to_string()),
            Err(PasswordPolicyError::TooShort { min: 6, actual: 3 })
        ));
        assert!(Password::new("secret1".to_string()).is_ok());
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let password = Password::new("secret1".to_string()).unwrap();
        assert_eq!(format!("{:?}", password), "Password(***)");
    }

    #[test]
    fn test_account_id_round_trip() {
        let id = AccountId::new();
        let parsed = AccountId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);

        assert!(AccountId::from_string("not-a-uuid").is_err());
    }
}

use thiserror::Error;

/// Error for AccountId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for AccountName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountNameError {
    #[error("The name field must not be empty")]
    Empty,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("The email field must be a valid email address")]
    InvalidFormat(String),
}

/// Error for password policy failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    #[error("The password field must have at least {min} characters")]
    TooShort { min: usize, actual: usize },
}

/// Top-level error for all account operations
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid name: {0}")]
    InvalidName(#[from] AccountNameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    // Deliberately covers both "email not found" and "wrong password" so
    // callers cannot enumerate registered emails.
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Directory error: {0}")]
    Directory(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

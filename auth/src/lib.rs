//! Authentication utilities library
//!
//! Provides the credential-validation building blocks for the account
//! service:
//! - Password hashing (bcrypt, tunable cost factor)
//! - Bearer token issuance and verification (JWT, HS256)
//! - Authentication coordination (verify password, issue token)
//!
//! The service wires these behind its own domain ports; nothing in this
//! crate knows about accounts, storage, or HTTP.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{Claims, TokenHandler};
//!
//! let handler = TokenHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::new("Ana", "ana@example.com", 24);
//! let token = handler.issue(&claims).unwrap();
//! let decoded = handler.verify(&token).unwrap();
//! assert_eq!(decoded.email, "ana@example.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let claims = Claims::new("Ana", "ana@example.com", 24);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! // Gate: verify token
//! let decoded = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(decoded.name, "Ana");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenHandler;
